//! Derive macros generating the codecs of `recodec` key and value records
//!
//! Every derive reads the same struct-level attribute:
//!
//! * `#[record(key)]`: canonical, order-preserving, fixed-width
//! * `#[record(value, compact)]`: per-field compressing serializer
//! * `#[record(value, pass_through)]`: per-field fixed-width, no transform
//! * `#[record(value)]`: compact when the `varint_values` feature is on,
//!   pass-through otherwise
//!
//! Generated code visits fields in declared order and refers to the runtime
//! through absolute `::recodec` paths.

extern crate proc_macro;

mod input;

use proc_macro::TokenStream;
use quote::quote;

use input::{RecordInput, Role};

fn expand(
    input: TokenStream,
    derive: &str,
    f: fn(&RecordInput<'_>) -> proc_macro2::TokenStream,
) -> TokenStream {
    let ast: syn::DeriveInput = match syn::parse(input) {
        Ok(ast) => ast,
        Err(err) => return err.to_compile_error().into(),
    };
    match RecordInput::parse(&ast, derive) {
        Ok(rec) => f(&rec).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[proc_macro_derive(Encode, attributes(record))]
pub fn encode_derive(input: TokenStream) -> TokenStream {
    expand(input, "Encode", impl_encode)
}

#[proc_macro_derive(Decode, attributes(record))]
pub fn decode_derive(input: TokenStream) -> TokenStream {
    expand(input, "Decode", impl_decode)
}

#[proc_macro_derive(Estimable, attributes(record))]
pub fn estimable_derive(input: TokenStream) -> TokenStream {
    expand(input, "Estimable", impl_estimable)
}

/// Generates the `Record` schema implementation and the full-field constructor `new`
#[proc_macro_derive(Record, attributes(record))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    expand(input, "Record", impl_record)
}

fn impl_encode(rec: &RecordInput<'_>) -> proc_macro2::TokenStream {
    let name = &rec.ast.ident;
    let (impl_generics, ty_generics, where_clause) = rec.ast.generics.split_for_impl();
    let codec = rec.role.codec();
    let ident = rec.fields.iter().map(|f| f.ident);

    quote! {
        impl #impl_generics ::recodec::conv::Encode for #name #ty_generics #where_clause {
            fn write_to<__U: ::recodec::conv::target::Target>(&self, buf: &mut __U) -> usize {
                0usize #( + #codec::write(&self.#ident, buf) )*
            }
        }
    }
}

fn impl_decode(rec: &RecordInput<'_>) -> proc_macro2::TokenStream {
    let name = &rec.ast.ident;
    let (impl_generics, ty_generics, where_clause) = rec.ast.generics.split_for_impl();
    let codec = rec.role.codec();
    let (ident, ty): (Vec<_>, Vec<_>) = rec.fields.iter().map(|f| (f.ident, f.ty)).unzip();

    // Struct-expression fields are evaluated in source order, which is wire order.
    quote! {
        impl #impl_generics ::recodec::conv::Decode for #name #ty_generics #where_clause {
            fn parse<__P: ::recodec::parse::Parser>(
                p: &mut __P,
            ) -> ::recodec::parse::ParseResult<Self> {
                ::core::result::Result::Ok(Self {
                    #( #ident: #codec::read::<#ty, __P>(p)? ),*
                })
            }
        }
    }
}

fn impl_estimable(rec: &RecordInput<'_>) -> proc_macro2::TokenStream {
    let name = &rec.ast.ident;
    let (impl_generics, ty_generics, where_clause) = rec.ast.generics.split_for_impl();
    let codec = rec.role.codec();

    match rec.role {
        Role::Key | Role::PassThrough => {
            let ty = rec.fields.iter().map(|f| f.ty);
            quote! {
                impl #impl_generics ::recodec::conv::len::FixedLength for #name #ty_generics #where_clause {
                    const LEN: usize = 0usize #( + #codec::width::<#ty>() )*;
                }

                impl #impl_generics ::recodec::conv::len::Estimable for #name #ty_generics #where_clause {
                    const KNOWN: ::core::option::Option<usize> = ::core::option::Option::Some(
                        <Self as ::recodec::conv::len::FixedLength>::LEN,
                    );

                    fn unknown(&self) -> usize {
                        <Self as ::recodec::conv::len::FixedLength>::LEN
                    }
                }
            }
        }
        Role::Compact => {
            let ident = rec.fields.iter().map(|f| f.ident);
            quote! {
                impl #impl_generics ::recodec::conv::len::Estimable for #name #ty_generics #where_clause {
                    const KNOWN: ::core::option::Option<usize> = ::core::option::Option::None;

                    fn unknown(&self) -> usize {
                        0usize #( + #codec::len(&self.#ident) )*
                    }
                }
            }
        }
    }
}

fn impl_record(rec: &RecordInput<'_>) -> proc_macro2::TokenStream {
    let name = &rec.ast.ident;
    let (impl_generics, ty_generics, where_clause) = rec.ast.generics.split_for_impl();
    let role = rec.role.schema_role();
    let (ident, ty): (Vec<_>, Vec<_>) = rec.fields.iter().map(|f| (f.ident, f.ty)).unzip();
    let label = rec.fields.iter().map(|f| f.label());

    quote! {
        impl #impl_generics ::recodec::schema::Record for #name #ty_generics #where_clause {
            const ROLE: ::recodec::schema::Role = #role;

            const FIELDS: ::recodec::schema::FieldList = &[
                #( ::recodec::schema::FieldDescriptor::new(
                    #label,
                    <#ty as ::recodec::scalar::Scalar>::KIND,
                ) ),*
            ];
        }

        impl #impl_generics #name #ty_generics #where_clause {
            #[allow(clippy::too_many_arguments)]
            #[must_use]
            pub fn new(#( #ident: #ty ),*) -> Self {
                Self { #( #ident ),* }
            }
        }
    }
}

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

/// Serialization discipline named by the `#[record(..)]` attribute
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Key,
    Compact,
    PassThrough,
}

impl Role {
    /// Path of the field codec module in `recodec::codec`
    pub(crate) fn codec(self) -> TokenStream {
        match self {
            Role::Key => quote! { ::recodec::codec::key },
            Role::Compact => quote! { ::recodec::codec::compact },
            Role::PassThrough => quote! { ::recodec::codec::raw },
        }
    }

    /// Expression of type `recodec::schema::Role`
    pub(crate) fn schema_role(self) -> TokenStream {
        match self {
            Role::Key => quote! { ::recodec::schema::Role::Key },
            Role::Compact => quote! {
                ::recodec::schema::Role::Value(::recodec::schema::ValueEncoding::Compact)
            },
            Role::PassThrough => quote! {
                ::recodec::schema::Role::Value(::recodec::schema::ValueEncoding::PassThrough)
            },
        }
    }
}

const fn default_value_role() -> Role {
    if cfg!(feature = "varint_values") {
        Role::Compact
    } else {
        Role::PassThrough
    }
}

pub(crate) struct Field<'a> {
    pub ident: &'a syn::Ident,
    pub ty: &'a syn::Type,
}

impl Field<'_> {
    /// Field name as it appears in descriptors, without any `r#` prefix
    pub(crate) fn label(&self) -> syn::LitStr {
        syn::LitStr::new(&self.ident.unraw().to_string(), self.ident.span())
    }
}

/// Validated view of a struct deriving one of the record traits
pub(crate) struct RecordInput<'a> {
    pub ast: &'a syn::DeriveInput,
    pub role: Role,
    pub fields: Vec<Field<'a>>,
}

impl<'a> RecordInput<'a> {
    pub(crate) fn parse(ast: &'a syn::DeriveInput, derive: &str) -> syn::Result<Self> {
        let named = match &ast.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(syn::FieldsNamed { named, .. }),
                ..
            }) => named,
            syn::Data::Struct(_) => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    format!("derive macro `{derive}` requires a struct with named fields"),
                ))
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    format!("derive macro `{derive}` not implemented for enums or unions"),
                ))
            }
        };

        let fields = named
            .iter()
            .filter_map(|f| f.ident.as_ref().map(|ident| Field { ident, ty: &f.ty }))
            .collect();

        Ok(Self {
            ast,
            role: parse_role(ast)?,
            fields,
        })
    }
}

fn parse_role(ast: &syn::DeriveInput) -> syn::Result<Role> {
    let mut is_key = false;
    let mut is_value = false;
    let mut encoding: Option<Role> = None;

    for attr in ast.attrs.iter().filter(|a| a.path().is_ident("record")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                is_key = true;
            } else if meta.path.is_ident("value") {
                is_value = true;
            } else if meta.path.is_ident("compact") {
                encoding = Some(Role::Compact);
            } else if meta.path.is_ident("pass_through") {
                encoding = Some(Role::PassThrough);
            } else {
                return Err(meta.error(
                    "unrecognized record option: expected `key`, `value`, `compact` or `pass_through`",
                ));
            }
            Ok(())
        })?;
    }

    match (is_key, is_value, encoding) {
        (true, false, None) => Ok(Role::Key),
        (true, false, Some(_)) => Err(syn::Error::new_spanned(
            &ast.ident,
            "key records are always canonical; `compact`/`pass_through` apply to values only",
        )),
        (false, true, Some(role)) => Ok(role),
        (false, true, None) => Ok(default_value_role()),
        (true, true, _) => Err(syn::Error::new_spanned(
            &ast.ident,
            "a record is either `key` or `value`, not both",
        )),
        (false, false, _) => Err(syn::Error::new_spanned(
            &ast.ident,
            "missing `#[record(key)]` or `#[record(value)]` attribute",
        )),
    }
}

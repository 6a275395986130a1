use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Lit, Meta, NestedMeta};

#[derive(Debug, Default)]
struct FieldAttribs {
    ignore: bool,
    default: bool,
    rename: Option<String>,
}

pub fn derive_dict_convertible(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    match ast.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => {
                let fields = fields
                    .named
                    .iter()
                    .filter_map(|field| {
                        let attribs = parse_field_attribs(&field.attrs);
                        if attribs.ignore {
                            return None;
                        }
                        let name = field.ident.as_ref().unwrap();
                        let key = attribs.rename.unwrap_or_else(|| name.to_string());
                        Some((name, key, attribs.default))
                    })
                    .collect::<Vec<_>>();
                let count = fields.len();
                let inserts = fields.iter().map(|(name, key, _)| {
                    quote! {
                        dict.insert(#key, self.#name.clone());
                    }
                });
                let takes = fields.iter().map(|(name, key, default)| {
                    if *default {
                        quote! {
                            if let Some(value) = dict.take_if_present(#key)? {
                                self.#name = value;
                            }
                        }
                    } else {
                        quote! {
                            self.#name = dict.take(#key)?;
                        }
                    }
                });
                quote! {
                    impl #impl_generics dict_intermediate::DictConvertible for #name #ty_generics #where_clause {
                        #[allow(unused_mut)]
                        fn to_dict(&self) -> dict_intermediate::Dict {
                            let mut dict = dict_intermediate::Dict::with_capacity(#count);
                            #( #inserts )*
                            dict
                        }

                        #[allow(unused_mut)]
                        fn from_dict(
                            mut self,
                            mut dict: dict_intermediate::Dict,
                        ) -> ::std::result::Result<Self, dict_intermediate::BoxError> {
                            #( #takes )*
                            Ok(self)
                        }
                    }
                }
                .into()
            }
            Fields::Unit => quote! {
                impl #impl_generics dict_intermediate::DictConvertible for #name #ty_generics #where_clause {
                    fn to_dict(&self) -> dict_intermediate::Dict {
                        dict_intermediate::Dict::new()
                    }

                    fn from_dict(
                        self,
                        _: dict_intermediate::Dict,
                    ) -> ::std::result::Result<Self, dict_intermediate::BoxError> {
                        Ok(self)
                    }
                }
            }
            .into(),
            Fields::Unnamed(_) => panic!(
                "DictConvertible can be derived only for structs with named fields or unit structs: {}",
                name
            ),
        },
        _ => panic!(
            "DictConvertible can be derived only for structs, found: {}",
            name
        ),
    }
}

fn parse_field_attribs(attrs: &[Attribute]) -> FieldAttribs {
    let mut result = FieldAttribs::default();
    for attrib in attrs {
        match attrib.parse_meta() {
            Err(error) => panic!(
                "Could not parse attribute `{}`: {:?}",
                attrib.to_token_stream(),
                error
            ),
            Ok(Meta::List(meta)) => {
                if meta.path.is_ident("dict_intermediate") {
                    for meta in meta.nested {
                        match &meta {
                            NestedMeta::Meta(Meta::Path(path)) => {
                                if path.is_ident("ignore") {
                                    result.ignore = true;
                                } else if path.is_ident("default") {
                                    result.default = true;
                                }
                            }
                            NestedMeta::Meta(Meta::NameValue(meta)) => {
                                if meta.path.is_ident("rename") {
                                    if let Lit::Str(value) = &meta.lit {
                                        result.rename = Some(value.value());
                                    }
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
            _ => {}
        }
    }
    result
}

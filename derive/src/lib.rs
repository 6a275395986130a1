extern crate proc_macro;

mod dict;

use proc_macro::TokenStream;

#[proc_macro_derive(DictConvertible, attributes(dict_intermediate))]
pub fn derive_dict_convertible(input: TokenStream) -> TokenStream {
    crate::dict::derive_dict_convertible(input)
}

use proc_macro::{self, TokenStream};
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

#[proc_macro_derive(Get)]
pub fn derive_get(input: TokenStream) -> TokenStream {
    let DeriveInput { ident, .. } = parse_macro_input!(input);
    let output = quote! {
        impl Get for #ident {}
    };
    output.into()
}

#[proc_macro_derive(Post)]
pub fn derive_post(input: TokenStream) -> TokenStream {
    let DeriveInput { ident, .. } = parse_macro_input!(input);
    let output = quote! {
        impl Post for #ident {}
    };
    output.into()
}

#[proc_macro_derive(Put)]
pub fn derive_put(input: TokenStream) -> TokenStream {
    let DeriveInput { ident, .. } = parse_macro_input!(input);
    let output = quote! {
        impl Put for #ident {}
    };
    output.into()
}

#[proc_macro_derive(Delete)]
pub fn derive_delete(input: TokenStream) -> TokenStream {
    let DeriveInput { ident, .. } = parse_macro_input!(input);
    let output = quote! {
        impl Delete for #ident {}
    };
    output.into()
}

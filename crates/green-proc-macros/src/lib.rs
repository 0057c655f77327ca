// green-marketplace-client/green-proc-macros
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Implements `From<&AppDependencies>` for a struct. Fields marked with `#[inject]` are cloned
/// from the field of the same name in `AppDependencies`, all others are initialized with
/// `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_deps(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);
    expand_inject_deps(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_inject_deps(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "InjectDependencies only supports structs.",
        ));
    };

    let Fields::Named(fields) = &struct_data.fields else {
        return Err(syn::Error::new(
            struct_data.fields.span(),
            "InjectDependencies only supports structs with named fields.",
        ));
    };

    let field_initialization = fields
        .named
        .iter()
        .map(initialize_field)
        .collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics From<&crate::app::deps::AppDependencies> for #name #ty_generics #where_clause {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    })
}

fn initialize_field(field: &Field) -> syn::Result<TokenStream2> {
    let ident = &field.ident;

    let Some(attr) = field.attrs.iter().find(|attr| attr.path().is_ident("inject")) else {
        return Ok(quote! { #ident: Default::default() });
    };

    // `#[inject]` takes no arguments.
    attr.meta.require_path_only()?;
    Ok(quote! { #ident: deps.#ident.clone() })
}

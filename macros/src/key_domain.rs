//! Implementation of the `#[derive(KeyDomain)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DataEnum, DeriveInput, Fields};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let (pushes, cardinalities) = match &input.data {
        Data::Enum(data) => enum_members(data)?,
        Data::Struct(data) => {
            let member = members(quote!(Self), &data.fields)?;
            (vec![member.push], vec![member.cardinality])
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "KeyDomain cannot be derived for unions",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics ::totalmap::KeyDomain for #name #ty_generics #where_clause {
            fn all() -> ::std::vec::Vec<Self> {
                #[allow(unused_mut)]
                let mut all = ::std::vec::Vec::with_capacity(
                    <Self as ::totalmap::KeyDomain>::cardinality(),
                );
                #(#pushes)*
                all
            }

            fn cardinality() -> usize {
                0usize #(+ #cardinalities)*
            }
        }
    })
}

/// Code that appends one constructor's values to `all`, and its cardinality.
struct Member {
    push: TokenStream2,
    cardinality: TokenStream2,
}

fn enum_members(data: &DataEnum) -> syn::Result<(Vec<TokenStream2>, Vec<TokenStream2>)> {
    let mut pushes = Vec::with_capacity(data.variants.len());
    let mut cardinalities = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        let ident = &variant.ident;
        let member = members(quote!(Self::#ident), &variant.fields)?;
        pushes.push(member.push);
        cardinalities.push(member.cardinality);
    }

    Ok((pushes, cardinalities))
}

fn members(path: TokenStream2, fields: &Fields) -> syn::Result<Member> {
    match fields {
        Fields::Unit => Ok(Member {
            push: quote!(all.push(#path);),
            cardinality: quote!(1usize),
        }),
        Fields::Unnamed(unnamed) if unnamed.unnamed.is_empty() => Ok(Member {
            push: quote!(all.push(#path());),
            cardinality: quote!(1usize),
        }),
        Fields::Named(named) if named.named.is_empty() => Ok(Member {
            push: quote!(all.push(#path {});),
            cardinality: quote!(1usize),
        }),
        Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
            let ty = &unnamed.unnamed[0].ty;
            Ok(Member {
                push: quote! {
                    all.extend(
                        <#ty as ::totalmap::KeyDomain>::all()
                            .into_iter()
                            .map(|inner| #path(inner)),
                    );
                },
                cardinality: quote!(<#ty as ::totalmap::KeyDomain>::cardinality()),
            })
        }
        Fields::Named(named) if named.named.len() == 1 => {
            let field = &named.named[0];
            let ty = &field.ty;
            let field_name = &field.ident;
            Ok(Member {
                push: quote! {
                    all.extend(
                        <#ty as ::totalmap::KeyDomain>::all()
                            .into_iter()
                            .map(|inner| #path { #field_name: inner }),
                    );
                },
                cardinality: quote!(<#ty as ::totalmap::KeyDomain>::cardinality()),
            })
        }
        _ => Err(syn::Error::new(
            fields.span(),
            "KeyDomain can only be derived for constructors with at most one field; \
             use a tuple field like `(A, B)` for products",
        )),
    }
}

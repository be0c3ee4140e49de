// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macro for fixed-width national ID records.
//!
//! This crate allows to `derive` a `Record` implementation and implements
//! `TryFrom` on the record too. Fields are read one after another, each
//! taking as many bytes as its `FixedField::LENGTH`.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Record)]
//! pub struct NationalId<'a> {
//!     pub birth_date: BirthDate<'a>,     // bytes 0..7
//!     pub governorate: Governorate<'a>,  // bytes 7..9
//!     pub birth_order: BirthOrder<'a>,   // bytes 9..13
//!     pub check_digit: CheckDigit<'a>,   // byte 13
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error, Fields};

/// Derive macro for implementing the `Record` trait.
///
/// Generates both the `Record` trait implementation and `TryFrom<&[u8]>` implementation.
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Extract lifetime parameter (should be 'a)
    let Some(lifetime) = generics.lifetimes().next() else {
        return Error::new_spanned(
            name,
            "Record types must have a lifetime parameter (e.g., 'a)",
        )
        .to_compile_error()
        .into();
    };

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Error::new_spanned(
                    name,
                    "Record derive only supports structs with named fields",
                )
                .to_compile_error()
                .into()
            }
        },
        _ => {
            return Error::new_spanned(name, "Record derive only supports structs")
                .to_compile_error()
                .into()
        }
    };

    // Fields are parsed in declaration order.
    let field_parsers = fields.iter().filter_map(|field| field.ident.as_ref()).map(
        |field_name| {
            quote! {
                #field_name: fields.next()?
            }
        },
    );

    let expanded = quote! {
        impl #impl_generics crate::record::Record<#lifetime> for #name #ty_generics #where_clause {
            fn parse(mut fields: crate::record::Fields<#lifetime>) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_parsers),*
                })
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&#lifetime [u8]> for #name #ty_generics #where_clause {
            type Error = crate::Error;

            fn try_from(bytes: &#lifetime [u8]) -> Result<Self, crate::Error> {
                <Self as crate::record::Record>::from_bytes(bytes)
            }
        }
    };

    TokenStream::from(expanded)
}

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

//! Derive macros for BCBP section types.
//!
//! This crate allows to `derive` a `Section` implementation. The derived
//! implementation carries the section's field table and parses the fields in
//! declaration order from a cursor.
//!
//! # Example
//!
//! Deriving the mandatory part of a flight leg:
//!
//! ```ignore
//! #[derive(Section)]
//! #[bcbp(phase = LegMandatory)]
//! pub struct FlightLeg<'a> {
//!     pub operating_carrier_pnr: Pnr<'a>,
//!     #[bcbp(class = Alpha)]  // Override the field type's character class
//!     pub from_airport: AirportCode<'a>,
//!     #[bcbp(skip)]  // Not part of the wire format, set to its default
//!     pub date_of_flight: Option<NaiveDate>,
//! }
//! ```
//!
//! Sections marked `#[bcbp(conditional)]` must only have `Option` fields. Each
//! field is read as long as the section's block has bytes left and is `None`
//! once the block is exhausted.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident};

struct SectionAttributes {
    phase: Ident,
    conditional: bool,
}

#[derive(Default)]
struct FieldAttributes {
    skip: bool,
    class: Option<Ident>,
}

fn parse_section_attributes(input: &DeriveInput) -> syn::Result<SectionAttributes> {
    let mut phase = None;
    let mut conditional = false;

    for attr in &input.attrs {
        if !attr.path().is_ident("bcbp") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            // Handle #[bcbp(phase = Header)]
            if meta.path.is_ident("phase") {
                phase = Some(meta.value()?.parse::<Ident>()?);
                Ok(())
            // Handle #[bcbp(conditional)]
            } else if meta.path.is_ident("conditional") {
                conditional = true;
                Ok(())
            } else {
                Err(meta.error("expected `phase = ...` or `conditional`"))
            }
        })?;
    }

    let phase = phase.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "sections need a #[bcbp(phase = ...)] attribute")
    })?;

    Ok(SectionAttributes { phase, conditional })
}

fn parse_field_attributes(field: &syn::Field) -> syn::Result<FieldAttributes> {
    let mut attributes = FieldAttributes::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("bcbp") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            // Handle #[bcbp(skip)]
            if meta.path.is_ident("skip") {
                attributes.skip = true;
                Ok(())
            // Handle #[bcbp(class = Alpha)]
            } else if meta.path.is_ident("class") {
                attributes.class = Some(meta.value()?.parse::<Ident>()?);
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `class = ...`"))
            }
        })?;
    }

    Ok(attributes)
}

/// Derive macro for implementing the `Section` trait.
///
/// Generates the section's `FIELDS` table and a `parse` implementation that
/// reads every field in declaration order.
#[proc_macro_derive(Section, attributes(bcbp))]
pub fn derive_section(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let lifetime = generics.lifetimes().next().ok_or_else(|| {
        syn::Error::new_spanned(name, "sections must have a lifetime parameter (e.g., 'a)")
    })?;
    let lifetime = &lifetime.lifetime;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Section derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Section derive only supports structs",
            ))
        }
    };

    let SectionAttributes { phase, conditional } = parse_section_attributes(input)?;

    let mut specs = Vec::new();
    let mut field_parsers = Vec::new();

    for field in fields {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "field must be named"))?;
        let attributes = parse_field_attributes(field)?;

        if attributes.skip {
            field_parsers.push(quote! {
                #field_name: ::core::default::Default::default()
            });
            continue;
        }

        let ty = &field.ty;
        let field_ty = if conditional {
            quote! { <#ty as crate::section::Conditional>::Inner }
        } else {
            quote! { #ty }
        };

        let label = field_name.to_string();
        let class = match &attributes.class {
            Some(class) => quote! { crate::layout::CharClass::#class },
            None => quote! { <#field_ty as crate::FixedField<#lifetime>>::CLASS },
        };

        let index = specs.len();
        specs.push(quote! {
            crate::layout::FieldSpec::fixed(
                #label,
                <#field_ty as crate::FixedField<#lifetime>>::LENGTH,
                #class,
                crate::layout::Phase::#phase,
            )
        });

        field_parsers.push(if conditional {
            quote! {
                #field_name: fields.next_conditional(&Self::FIELDS[#index])?
            }
        } else {
            quote! {
                #field_name: fields.next(&Self::FIELDS[#index])?
            }
        });
    }

    Ok(quote! {
        impl #impl_generics crate::section::Section<#lifetime> for #name #ty_generics #where_clause {
            const PHASE: crate::layout::Phase = crate::layout::Phase::#phase;

            const FIELDS: &'static [crate::layout::FieldSpec] = &[#(#specs),*];

            fn parse(fields: &mut crate::section::Fields<#lifetime>) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_parsers),*
                })
            }
        }
    })
}

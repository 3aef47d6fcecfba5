//! Config derive macro - generates FIELDS.
//!
//! Key names follow serde: a field's `#[serde(rename)]` wins over the
//! struct's `#[serde(rename_all)]`, and `#[config(name)]` wins over both.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, ext::IdentExt};

/// Parsed field information.
#[derive(Debug)]
struct FieldInfo {
    name: syn::Ident,
    key: String,
    skip: bool,
}

/// Generate Config implementation (FIELDS).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let section = get_config_str(&input.attrs, "section")
        .unwrap_or_else(|| infer_section(&name.to_string()));
    let rename_all = get_serde_str(&input.attrs, "rename_all");

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return quote! { compile_error!("Config only works on structs with named fields"); },
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            let attrs = &field.attrs;
            let raw = ident.unraw().to_string();

            let key = get_config_str(attrs, "name")
                .or_else(|| get_serde_str(attrs, "rename"))
                .unwrap_or_else(|| apply_rename_all(&raw, rename_all.as_deref()));

            Some(FieldInfo {
                name: ident.clone(),
                key,
                skip: has_config_flag(attrs, "skip"),
            })
        })
        .filter(|f| !f.skip)
        .collect();

    let field_defs = field_infos.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = field_infos.iter().map(|f| {
        let name = &f.name;
        let full_path = if section.is_empty() {
            f.key.clone()
        } else {
            format!("{}.{}", section, f.key)
        };
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    quote! {
        #[allow(dead_code)]
        #[derive(Debug, Clone, Copy)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Dotted paths of every field in this section.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };
        }
    }
}

// ============================================================================
// attribute parsing
// ============================================================================

fn get_config_str(attrs: &[Attribute], key: &str) -> Option<String> {
    get_string_attr(attrs, "config", key)
}

fn get_serde_str(attrs: &[Attribute], key: &str) -> Option<String> {
    get_string_attr(attrs, "serde", key)
}

fn get_string_attr(attrs: &[Attribute], namespace: &str, key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident(namespace) {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else {
                skip_value(&meta);
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

fn has_config_flag(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            skip_value(&meta);
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

/// Consume `= "value"` of a nested meta we are not interested in.
fn skip_value(meta: &syn::meta::ParseNestedMeta<'_>) {
    if meta.input.peek(syn::Token![=]) {
        let _ = meta.value();
        let _: Option<syn::Lit> = meta.input.parse().ok();
    }
}

// ============================================================================
// naming
// ============================================================================

fn apply_rename_all(field: &str, rule: Option<&str>) -> String {
    match rule {
        Some("camelCase") => to_camel_case(field),
        Some("lowercase") => field.to_ascii_lowercase(),
        Some("kebab-case") => field.replace('_', "-"),
        _ => field.to_string(),
    }
}

fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_snake_case(name)
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use std::collections::HashSet;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{
    Data, DeriveInput, Expr, Fields, Ident, LitStr, Token, Type, parse_macro_input,
    spanned::Spanned,
};

mod accessor_impl;

use accessor_impl::FieldCodegen;

#[proc_macro_derive(EnumAttr, attributes(enum_attr))]
pub fn derive_enum_attr(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_enum_attr(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_enum_attr(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            input.generics,
            "EnumAttr does not support generic structs yet",
        ));
    }

    let data_struct = match input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new(
                struct_name.span(),
                "EnumAttr can only be derived for structs",
            ));
        }
    };

    let named_fields = match data_struct.fields {
        Fields::Named(fields) => fields,
        _ => {
            return Err(syn::Error::new(
                struct_name.span(),
                "EnumAttr requires named fields",
            ));
        }
    };

    let mut declarations = Vec::<FieldDeclaration>::new();
    for field in named_fields.named {
        let Some(options) = parse_enum_attr_field_options(&field.attrs)? else {
            continue;
        };

        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(field.span(), "EnumAttr requires named fields"))?;
        let inner_ty = option_inner_type(&field.ty).ok_or_else(|| {
            syn::Error::new(
                field.ty.span(),
                "#[enum_attr] fields must be declared as Option<T>",
            )
        })?;

        let declaration = classify_entries(options.entries, options.values_span)?;

        if let DeclarationAst::Mapping(entries) = &declaration {
            for entry in entries {
                if entry.name == ident {
                    return Err(syn::Error::new(
                        entry.name.span(),
                        format!(
                            "Entry '{}' collides with the field name; the generated mutator would conflict with the field setter",
                            entry.name,
                        ),
                    ));
                }
            }
        }

        let resolved_default = options
            .default
            .map(|expr| resolve_default(&declaration, expr))
            .transpose()?;
        let plural = options
            .plural
            .unwrap_or_else(|| pluralize(ident.to_string().trim_start_matches("r#")));

        declarations.push(FieldDeclaration {
            ident,
            inner_ty,
            declaration,
            resolved_default,
            plural,
            persisted: options.persisted,
        });
    }

    if declarations.is_empty() {
        return Err(syn::Error::new(
            struct_name.span(),
            "EnumAttr requires at least one #[enum_attr(...)] field",
        ));
    }

    let codegens: Vec<FieldCodegen> = declarations.iter().map(FieldCodegen::new).collect();
    let inner_types: Vec<&Type> = declarations.iter().map(|decl| &decl.inner_ty).collect();
    let field_methods = codegens.iter().map(FieldCodegen::inherent_methods);
    let default_stmts = codegens.iter().map(FieldCodegen::default_apply_stmt);
    let descriptor_exprs = codegens.iter().map(FieldCodegen::descriptor_expr);

    Ok(quote! {
        impl #struct_name {
            fn __enum_attr_type_checks()
            where
                #( #inner_types: ::enum_attr::EnumValue, )*
            {}

            #( #field_methods )*
        }

        impl ::enum_attr::EnumAttrModel for #struct_name {
            fn apply_enum_defaults(&mut self) {
                Self::__enum_attr_type_checks();
                #( #default_stmts )*
            }

            fn enum_attr_descriptors() -> Vec<::enum_attr::EnumAttrDescriptor> {
                vec![ #( #descriptor_exprs ),* ]
            }
        }
    })
}

pub(crate) struct FieldDeclaration {
    pub(crate) ident: Ident,
    pub(crate) inner_ty: Type,
    pub(crate) declaration: DeclarationAst,
    pub(crate) resolved_default: Option<Expr>,
    pub(crate) plural: String,
    pub(crate) persisted: bool,
}

pub(crate) enum DeclarationAst {
    Mapping(Vec<MappingEntry>),
    List(Vec<Expr>),
}

pub(crate) struct MappingEntry {
    pub(crate) name: Ident,
    pub(crate) value: Expr,
}

enum EntryAst {
    Named { name: Ident, value: Expr },
    Bare(Expr),
}

impl Parse for EntryAst {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Ident) && input.peek2(Token![=]) {
            let name: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let value: Expr = input.parse()?;
            Ok(Self::Named { name, value })
        } else {
            Ok(Self::Bare(input.parse()?))
        }
    }
}

struct EnumAttrFieldOptions {
    entries: Vec<EntryAst>,
    values_span: Span,
    default: Option<Expr>,
    plural: Option<String>,
    persisted: bool,
}

fn parse_enum_attr_field_options(
    attrs: &[syn::Attribute],
) -> syn::Result<Option<EnumAttrFieldOptions>> {
    let mut options: Option<EnumAttrFieldOptions> = None;

    for attr in attrs {
        if !attr.path().is_ident("enum_attr") {
            continue;
        }

        if options.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "Duplicate #[enum_attr(...)] attribute on field",
            ));
        }

        let mut parsed = EnumAttrFieldOptions {
            entries: Vec::new(),
            values_span: attr.span(),
            default: None,
            plural: None,
            persisted: false,
        };
        let mut has_values = false;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("values") {
                let content;
                syn::parenthesized!(content in meta.input);
                let entries = Punctuated::<EntryAst, Token![,]>::parse_terminated(&content)?;
                parsed.values_span = meta.path.span();
                parsed.entries = entries.into_iter().collect();
                has_values = true;
                return Ok(());
            }

            if meta.path.is_ident("default") {
                let value = meta.value()?;
                parsed.default = Some(value.parse()?);
                return Ok(());
            }

            if meta.path.is_ident("plural") {
                let value = meta.value()?;
                let lit: LitStr = value.parse()?;
                parsed.plural = Some(lit.value());
                return Ok(());
            }

            if meta.path.is_ident("persisted") {
                parsed.persisted = true;
                return Ok(());
            }

            Err(meta.error(
                "Unsupported #[enum_attr(...)] option. Supported: values(...), default = <entry|literal>, plural = \"...\", persisted",
            ))
        })?;

        if !has_values || parsed.entries.is_empty() {
            return Err(syn::Error::new(
                attr.span(),
                "#[enum_attr(...)] requires a non-empty values(...) declaration",
            ));
        }

        options = Some(parsed);
    }

    Ok(options)
}

fn classify_entries(entries: Vec<EntryAst>, values_span: Span) -> syn::Result<DeclarationAst> {
    let mut named = Vec::new();
    let mut bare = Vec::new();

    for entry in entries {
        match entry {
            EntryAst::Named { name, value } => named.push(MappingEntry { name, value }),
            EntryAst::Bare(expr) => bare.push(expr),
        }
    }

    match (named.is_empty(), bare.is_empty()) {
        (false, true) => {
            let mut seen = HashSet::new();
            for entry in &named {
                if !seen.insert(entry.name.to_string()) {
                    return Err(syn::Error::new(
                        entry.name.span(),
                        format!("Duplicate entry name '{}' in values(...)", entry.name),
                    ));
                }
            }
            Ok(DeclarationAst::Mapping(named))
        }
        (true, false) => Ok(DeclarationAst::List(bare)),
        (false, false) => Err(syn::Error::new(
            values_span,
            "values(...) cannot mix named and unnamed entries",
        )),
        (true, true) => Err(syn::Error::new(
            values_span,
            "values(...) must declare at least one entry",
        )),
    }
}

fn resolve_default(declaration: &DeclarationAst, default: Expr) -> syn::Result<Expr> {
    let DeclarationAst::Mapping(entries) = declaration else {
        return Ok(default);
    };

    let Some(name) = bare_ident(&default) else {
        return Ok(default);
    };

    match entries.iter().find(|entry| entry.name == name) {
        Some(entry) => Ok(entry.value.clone()),
        None => {
            let known = entries
                .iter()
                .map(|entry| entry.name.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Err(syn::Error::new(
                default.span(),
                format!("Unknown default entry '{}'. Known entries: {}", name, known),
            ))
        }
    }
}

fn bare_ident(expr: &Expr) -> Option<Ident> {
    let Expr::Path(path) = expr else {
        return None;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() || path.path.segments.len() != 1 {
        return None;
    }
    let segment = &path.path.segments[0];
    if !segment.arguments.is_empty() {
        return None;
    }
    Some(segment.ident.clone())
}

fn option_inner_type(ty: &Type) -> Option<Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    first_generic_type(segment)
}

fn first_generic_type(segment: &syn::PathSegment) -> Option<Type> {
    let syn::PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };

    for arg in &arguments.args {
        if let syn::GenericArgument::Type(ty) = arg {
            return Some(ty.clone());
        }
    }
    None
}

fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return word.to_string();
    }

    let lower = word.to_ascii_lowercase();
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{}es", word);
    }

    if let Some(stem) = word.strip_suffix('y') {
        let preceding = stem.chars().last();
        let vowel = matches!(preceding, Some('a' | 'e' | 'i' | 'o' | 'u'));
        if preceding.is_some() && !vowel {
            return format!("{}ies", stem);
        }
    }

    format!("{}s", word)
}

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

use crate::{DeclarationAst, FieldDeclaration};

/// Builds the generated surface of one declared field.
pub(crate) struct FieldCodegen<'a> {
    decl: &'a FieldDeclaration,
    field_name: String,
    available_const: Ident,
    available_method: Ident,
    setter: Ident,
    set_default: Ident,
}

impl<'a> FieldCodegen<'a> {
    pub(crate) fn new(decl: &'a FieldDeclaration) -> Self {
        let field_name = decl.ident.to_string().trim_start_matches("r#").to_string();
        Self {
            available_const: format_ident!("AVAILABLE_{}", decl.plural.to_uppercase()),
            available_method: format_ident!("available_{}", decl.plural),
            setter: format_ident!("set_{}", field_name),
            set_default: format_ident!("set_default_{}", field_name),
            field_name,
            decl,
        }
    }

    pub(crate) fn inherent_methods(&self) -> TokenStream {
        let field = &self.decl.ident;
        let inner_ty = &self.decl.inner_ty;
        let available_const = &self.available_const;
        let available_method = &self.available_method;
        let setter = &self.setter;

        let availability = match &self.decl.declaration {
            DeclarationAst::Mapping(entries) => {
                let names = entries.iter().map(|entry| entry_name(&entry.name));
                let values = entries.iter().map(|entry| &entry.value);
                quote! {
                    pub const #available_const: &'static [(&'static str, #inner_ty)] = &[
                        #( (#names, #values) ),*
                    ];

                    pub fn #available_method(&self) -> &'static [(&'static str, #inner_ty)] {
                        Self::#available_const
                    }
                }
            }
            DeclarationAst::List(values) => {
                quote! {
                    pub const #available_const: &'static [#inner_ty] = &[ #( #values ),* ];

                    pub fn #available_method(&self) -> &'static [#inner_ty] {
                        Self::#available_const
                    }
                }
            }
        };

        let accessors = quote! {
            pub fn #field(&self) -> Option<&#inner_ty> {
                self.#field.as_ref()
            }

            pub fn #setter(&mut self, value: #inner_ty) {
                self.#field = Some(value);
            }
        };

        let entry_methods = match &self.decl.declaration {
            DeclarationAst::Mapping(entries) => {
                let methods = entries.iter().map(|entry| {
                    let name = entry_name(&entry.name);
                    let predicate = format_ident!("is_{}", name);
                    let mutator = format_ident!("set_{}", name);
                    let value = &entry.value;
                    quote! {
                        pub fn #predicate(&self) -> bool {
                            self.#field.as_ref().is_some_and(|current| *current == (#value))
                        }

                        pub fn #mutator(&mut self) {
                            self.#setter(#value);
                        }
                    }
                });
                quote! { #( #methods )* }
            }
            DeclarationAst::List(_) => quote!(),
        };

        let default_method = match &self.decl.resolved_default {
            Some(default_expr) => {
                let set_default = &self.set_default;
                quote! {
                    pub fn #set_default(&mut self) {
                        if self.#field.is_none() {
                            self.#field = Some(#default_expr);
                        }
                    }
                }
            }
            None => quote!(),
        };

        let persisted_methods = self.persisted_methods();

        quote! {
            #availability
            #accessors
            #entry_methods
            #default_method
            #persisted_methods
        }
    }

    fn persisted_methods(&self) -> TokenStream {
        if !self.decl.persisted {
            return quote!();
        }

        let inner_ty = &self.decl.inner_ty;
        let setter = &self.setter;
        let setter_persisted = format_ident!("{}_persisted", setter);
        let field_name = self.field_name.as_str();

        let write_through_setter = quote! {
            pub async fn #setter_persisted(
                &mut self,
                store: &dyn ::enum_attr::EnumStore,
                value: #inner_ty,
            ) -> ::enum_attr::Result<()> {
                let payload = <#inner_ty as ::enum_attr::EnumValue>::to_json(&value);
                self.#setter(value);
                store
                    .update_field(
                        ::enum_attr::StoredEntity::store_table(self),
                        ::enum_attr::StoredEntity::store_id(self),
                        #field_name,
                        payload,
                    )
                    .await
            }
        };

        let entry_write_throughs = match &self.decl.declaration {
            DeclarationAst::Mapping(entries) => {
                let methods = entries.iter().map(|entry| {
                    let name = entry_name(&entry.name);
                    let mutator = format_ident!("set_{}", name);
                    let mutator_persisted = format_ident!("set_{}_persisted", name);
                    let value = &entry.value;
                    quote! {
                        pub async fn #mutator_persisted(
                            &mut self,
                            store: &dyn ::enum_attr::EnumStore,
                        ) -> ::enum_attr::Result<()> {
                            self.#mutator();
                            store
                                .update_field(
                                    ::enum_attr::StoredEntity::store_table(self),
                                    ::enum_attr::StoredEntity::store_id(self),
                                    #field_name,
                                    <#inner_ty as ::enum_attr::EnumValue>::to_json(&(#value)),
                                )
                                .await
                        }
                    }
                });
                quote! { #( #methods )* }
            }
            DeclarationAst::List(_) => quote!(),
        };

        quote! {
            #write_through_setter
            #entry_write_throughs
        }
    }

    pub(crate) fn default_apply_stmt(&self) -> TokenStream {
        match &self.decl.resolved_default {
            Some(_) => {
                let set_default = &self.set_default;
                quote! { self.#set_default(); }
            }
            None => quote!(),
        }
    }

    pub(crate) fn descriptor_expr(&self) -> TokenStream {
        let field_name = self.field_name.as_str();
        let plural = self.decl.plural.as_str();
        let inner_ty = &self.decl.inner_ty;
        let write_through = self.decl.persisted;

        let (kind, entries) = match &self.decl.declaration {
            DeclarationAst::Mapping(entries) => {
                let items = entries.iter().map(|entry| {
                    let name = entry_name(&entry.name);
                    let value = &entry.value;
                    quote! {
                        ::enum_attr::EnumEntryDescriptor {
                            name: Some(#name.to_string()),
                            value: <#inner_ty as ::enum_attr::EnumValue>::to_json(&(#value)),
                        }
                    }
                });
                (
                    quote!(::enum_attr::DeclarationKind::Mapping),
                    quote! { vec![ #( #items ),* ] },
                )
            }
            DeclarationAst::List(values) => {
                let items = values.iter().map(|value| {
                    quote! {
                        ::enum_attr::EnumEntryDescriptor {
                            name: None,
                            value: <#inner_ty as ::enum_attr::EnumValue>::to_json(&(#value)),
                        }
                    }
                });
                (
                    quote!(::enum_attr::DeclarationKind::List),
                    quote! { vec![ #( #items ),* ] },
                )
            }
        };

        let default = match &self.decl.resolved_default {
            Some(expr) => quote! {
                Some(<#inner_ty as ::enum_attr::EnumValue>::to_json(&(#expr)))
            },
            None => quote! { None },
        };

        quote! {
            ::enum_attr::EnumAttrDescriptor {
                field: #field_name.to_string(),
                plural: #plural.to_string(),
                kind: #kind,
                entries: #entries,
                default: #default,
                write_through: #write_through,
            }
        }
    }
}

fn entry_name(ident: &Ident) -> String {
    ident.to_string().trim_start_matches("r#").to_string()
}

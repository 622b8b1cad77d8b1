// ============================================================================
// SELLER CONTEXT - compartir el estado del vendedor entre componentes
// ============================================================================
// Usa Context API de Yew para exponer el UseSellerHandle globalmente
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_seller::{use_seller, UseSellerHandle};

/// Provider que envuelve la app y proporciona el estado del vendedor
#[function_component(SellerContextProvider)]
pub fn seller_context_provider(props: &SellerContextProviderProps) -> Html {
    let seller_handle = use_seller();

    html! {
        <ContextProvider<UseSellerHandle> context={seller_handle}>
            {props.children.clone()}
        </ContextProvider<UseSellerHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SellerContextProviderProps {
    pub children: Children,
}

/// Acceso al contexto desde cualquier página bajo el provider
#[hook]
pub fn use_seller_context() -> UseSellerHandle {
    use_context::<UseSellerHandle>()
        .expect("use_seller_context fuera de un SellerContextProvider")
}

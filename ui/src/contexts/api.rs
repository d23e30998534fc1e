use std::rc::Rc;

use payloads::APIClient;
use yew::prelude::*;

/// Shared handle to the configured API client. Cheap to clone;
/// equality is handle identity, which only changes when the base URL
/// does.
#[derive(Clone)]
pub struct Api(Rc<APIClient>);

impl PartialEq for Api {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for Api {
    type Target = APIClient;

    fn deref(&self) -> &APIClient {
        &self.0
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    /// Backend base URL, injected once at the application root.
    pub base_url: AttrValue,
    pub children: Children,
}

/// Provides the API client to the component tree. Components and
/// hooks obtain it with [`use_api`] instead of constructing clients
/// from ambient configuration.
#[function_component]
pub fn ApiProvider(props: &ApiProviderProps) -> Html {
    let api = use_memo(props.base_url.clone(), |base_url| {
        Api(Rc::new(APIClient::new(base_url.to_string())))
    });

    html! {
        <ContextProvider<Api> context={(*api).clone()}>
            {props.children.clone()}
        </ContextProvider<Api>>
    }
}

#[hook]
pub fn use_api() -> Api {
    use_context::<Api>().expect("use_api must be used within an ApiProvider")
}

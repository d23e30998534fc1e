use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Modal overlay for the booking editor. Clicking the backdrop closes
/// it unless the caller turns that off (e.g. while a request is in
/// flight).
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub children: Html,
    /// Called on backdrop clicks.
    pub on_close: Callback<()>,
    /// Set false to make backdrop clicks a no-op.
    #[prop_or(true)]
    pub close_on_backdrop: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let onclick = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        let close_on_backdrop = props.close_on_backdrop;

        Callback::from(move |e: MouseEvent| {
            if !close_on_backdrop {
                return;
            }

            // Clicks inside the dialog bubble up with a different
            // target; only a direct backdrop hit closes.
            let backdrop = backdrop_ref.cast::<web_sys::Element>();
            let target = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            if backdrop.is_some() && backdrop == target {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref.clone()}
            {onclick}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl
                        w-full max-w-lg p-6">
                {props.children.clone()}
            </div>
        </div>
    }
}

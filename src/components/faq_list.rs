use yew::prelude::*;

use crate::accordion::{AccordionAction, AccordionState};
use crate::models::FaqEntry;

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

/// FAQ rows where opening one answer closes the other.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_reducer(AccordionState::default);

    html! {
        <div class="faq-list">
            {
                for props.entries.iter().enumerate().map(|(index, entry)| {
                    let is_open = accordion.is_open(index);
                    let toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.dispatch(AccordionAction::Toggle(index));
                        })
                    };

                    html! {
                        <div key={index} class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                                <span class="question-text">{&entry.question}</span>
                                <span class="toggle-icon">{accordion.glyph(index)}</span>
                            </button>
                            {
                                if is_open {
                                    html! { <div class="faq-answer">{&entry.answer}</div> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                })
            }
        </div>
    }
}

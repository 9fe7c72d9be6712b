use yew::prelude::*;

use crate::components::reveal_section::RevealSection;
use crate::models::PricingPlan;
use crate::reveal::controller::TargetId;

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: PricingPlan,
    pub target: TargetId,
    pub node_ref: NodeRef,
    pub revealed: bool,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;

    html! {
        <RevealSection
            target={props.target}
            node_ref={props.node_ref.clone()}
            revealed={props.revealed}
            class={classes!(plan.color.card_class())}
        >
            {
                if let Some(badge) = &plan.badge {
                    html! { <div class="plan-badge">{badge}</div> }
                } else {
                    html! {}
                }
            }
            <h4 class="plan-title">{&plan.title}</h4>
            <p class="plan-subtitle">{&plan.subtitle}</p>
            <div class="plan-price">{&plan.price}</div>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! { <li>{format!("• {}", feature)}</li> }) }
            </ul>
            <p class="plan-delivery">{format!("Delivery: {}", plan.time)}</p>
            <button class={plan.color.button_class()}>{"Get Started"}</button>
        </RevealSection>
    }
}

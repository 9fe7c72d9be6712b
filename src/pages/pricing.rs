use yew::prelude::*;

use crate::components::faq_list::FaqList;
use crate::components::plan_card::PlanCard;
use crate::components::reveal_section::RevealSection;
use crate::config::RevealSettings;
use crate::content::PageContent;
use crate::reveal::controller::{RevealMap, TargetId};
use crate::reveal::dom::mount_reveal;

#[derive(Properties, PartialEq)]
pub struct PricingPageProps {
    pub content: PageContent,
}

/// Reveal target ids in page order: header, one per plan, domain callout, FAQ.
pub struct SectionLayout {
    plans: usize,
}

impl SectionLayout {
    pub fn new(plans: usize) -> Self {
        Self { plans }
    }

    pub fn header(&self) -> TargetId {
        TargetId(0)
    }

    pub fn plan(&self, index: usize) -> TargetId {
        TargetId(1 + index)
    }

    pub fn domain(&self) -> TargetId {
        TargetId(self.plans + 1)
    }

    pub fn faq(&self) -> TargetId {
        TargetId(self.plans + 2)
    }

    pub fn len(&self) -> usize {
        self.plans + 3
    }
}

pub fn reveal_css(settings: &RevealSettings) -> String {
    format!(
        r#"
        .reveal {{
            opacity: 0;
            transform: translateY({offset});
            transition: opacity {ms}ms ease-out, transform {ms}ms ease-out;
        }}
        .reveal.revealed {{
            opacity: 1;
            transform: translateY(0);
        }}
        "#,
        offset = settings.offset,
        ms = settings.transition_ms,
    )
}

#[function_component(PricingPage)]
pub fn pricing_page(props: &PricingPageProps) -> Html {
    let content = &props.content;
    let layout = SectionLayout::new(content.plans.len());
    let revealed = use_reducer(RevealMap::default);
    let section_refs = use_memo(|count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(), layout.len());

    {
        let dispatcher = revealed.dispatcher();
        let section_refs = section_refs.clone();
        let threshold = content.reveal.threshold;
        use_effect_with_deps(
            move |_| {
                let destructor = mount_reveal(&section_refs, threshold, dispatcher);
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let node = |id: TargetId| section_refs[id.0].clone();

    html! {
        <section class="pricing-section">
            <div class="accent accent-top"></div>
            <div class="accent accent-bottom"></div>

            <RevealSection
                target={layout.header()}
                node_ref={node(layout.header())}
                revealed={revealed.is_revealed(layout.header())}
                class="pricing-header"
            >
                <p class="pricing-eyebrow">{&content.eyebrow}</p>
                <p class="pricing-tagline">{&content.tagline}</p>
            </RevealSection>

            <div class="plan-grid">
                {
                    for content.plans.iter().enumerate().map(|(i, plan)| {
                        let id = layout.plan(i);
                        html! {
                            <PlanCard
                                key={i}
                                plan={plan.clone()}
                                target={id}
                                node_ref={node(id)}
                                revealed={revealed.is_revealed(id)}
                            />
                        }
                    })
                }
            </div>

            <RevealSection
                target={layout.domain()}
                node_ref={node(layout.domain())}
                revealed={revealed.is_revealed(layout.domain())}
                class="domain-callout"
            >
                <div class="domain-card">
                    <h3>{&content.domain.title}</h3>
                    <p class="domain-description">{&content.domain.description}</p>
                    <p class="domain-price">
                        {&content.domain.price}{" "}
                        <span class="domain-period">{&content.domain.period}</span>
                    </p>
                </div>
            </RevealSection>

            <RevealSection
                target={layout.faq()}
                node_ref={node(layout.faq())}
                revealed={revealed.is_revealed(layout.faq())}
                class="faq-block"
            >
                <h3 class="faq-heading">{&content.faq_heading}</h3>
                <FaqList entries={content.faq.clone()} />
            </RevealSection>

            <p class="closing-quote">{format!("“{}”", content.closing)}</p>

            <style>
                {reveal_css(&content.reveal)}
                {r#"
                .pricing-section {
                    position: relative;
                    overflow: hidden;
                    background: #FAF6F3;
                    color: #4A423F;
                }
                .accent {
                    position: absolute;
                    width: 400px;
                    height: 400px;
                    border-radius: 9999px;
                    filter: blur(64px);
                }
                .accent-top {
                    top: 0;
                    right: 0;
                    background: rgba(212, 180, 131, 0.2);
                }
                .accent-bottom {
                    bottom: 0;
                    left: 0;
                    background: rgba(196, 138, 138, 0.2);
                }
                .pricing-header {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem 4rem;
                    text-align: center;
                }
                .pricing-eyebrow {
                    text-transform: uppercase;
                    letter-spacing: 0.35em;
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .pricing-tagline {
                    color: #4B5563;
                    font-size: 0.75rem;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .plan-grid {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem 6rem;
                    display: grid;
                    gap: 2.5rem;
                }
                @media (min-width: 1024px) {
                    .plan-grid {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }
                }
                .plan-card {
                    border-radius: 2.2rem;
                    padding: 2.5rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }
                .plan-card.revealed:hover {
                    transform: translateY(-0.5rem);
                }
                .plan-card.light {
                    background: #FFFFFF;
                    color: #4A423F;
                }
                .plan-card.gold {
                    background: #FFF8EC;
                    border: 1px solid #D4B483;
                }
                .plan-card.dark {
                    background: #7D3C4C;
                    color: #FFFFFF;
                }
                .plan-badge {
                    display: inline-block;
                    margin-bottom: 1rem;
                    padding: 0.25rem 1rem;
                    font-size: 0.75rem;
                    border-radius: 9999px;
                    background: #D4B483;
                    color: #FFFFFF;
                }
                .plan-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .plan-subtitle {
                    font-size: 0.875rem;
                    opacity: 0.8;
                    margin-bottom: 1.5rem;
                }
                .plan-price {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin-bottom: 1.5rem;
                    font-size: 0.875rem;
                }
                .plan-features li {
                    margin-bottom: 0.75rem;
                }
                .plan-delivery {
                    font-size: 0.875rem;
                    opacity: 0.7;
                    margin-bottom: 1.5rem;
                }
                .plan-button {
                    width: 100%;
                    padding: 0.75rem 0;
                    border-radius: 9999px;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.2s, color 0.2s;
                }
                .plan-button.inverted {
                    background: #FFFFFF;
                    color: #7D3C4C;
                    border: none;
                }
                .plan-button.outlined {
                    background: transparent;
                    color: inherit;
                    border: 1px solid currentColor;
                }
                .plan-button.outlined:hover {
                    background: #4A423F;
                    color: #FFFFFF;
                }
                .domain-callout {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem 6rem;
                    text-align: center;
                }
                .domain-card {
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(24px);
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                .domain-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }
                .domain-description {
                    color: #4B5563;
                    margin-bottom: 1rem;
                }
                .domain-price {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .domain-period {
                    font-size: 1rem;
                    font-weight: 500;
                    color: #6B7280;
                }
                .faq-block {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 0 1.5rem 8rem;
                }
                .faq-heading {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faq-item {
                    margin-bottom: 1.25rem;
                    background: #FFFFFF;
                    border-radius: 1rem;
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    text-align: left;
                    font-weight: 500;
                    color: #4A423F;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.25rem;
                }
                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                    color: #4B5563;
                }
                .closing-quote {
                    text-align: center;
                    font-style: italic;
                    color: #4B5563;
                    padding-bottom: 5rem;
                }
                "#}
            </style>
        </section>
    }
}

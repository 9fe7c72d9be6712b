use yew::prelude::*;

use crate::reveal::controller::TargetId;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub target: TargetId,
    pub node_ref: NodeRef,
    pub revealed: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

pub fn reveal_classes(base: &Classes, revealed: bool) -> Classes {
    classes!("reveal", revealed.then(|| "revealed"), base.clone())
}

/// Container that fades up into place once its target has been revealed.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    html! {
        <div
            ref={props.node_ref.clone()}
            class={reveal_classes(&props.class, props.revealed)}
            data-reveal-id={props.target.to_string()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_section_lacks_revealed_class() {
        let classes = reveal_classes(&classes!("plan-card", "gold"), false);
        assert!(classes.contains("reveal"));
        assert!(classes.contains("plan-card"));
        assert!(!classes.contains("revealed"));
    }

    #[test]
    fn revealed_section_gets_revealed_class() {
        let classes = reveal_classes(&Classes::new(), true);
        assert!(classes.contains("reveal"));
        assert!(classes.contains("revealed"));
    }
}

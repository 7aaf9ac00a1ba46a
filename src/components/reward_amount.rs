use crate::model::ClaimOutcome;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RewardAmountProps {
    pub outcome: ClaimOutcome,
}

#[function_component(RewardAmountComp)]
pub fn reward_amount_comp(props: &RewardAmountProps) -> Html {
    html! {
        <span class="tokens">{props.outcome.tokens_text()}</span>
    }
}

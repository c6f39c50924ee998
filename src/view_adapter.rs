use serde_json::{json, Value};
use crate::ranking_engine::{
    evaluator::Classification,
    models::Card,
    probability::ProbabilityMap,
};

/// Card label expected by the client card renderer, e.g. "10 of Hearts".
fn to_client_card(c: &Card) -> String {
    c.to_string()
}

/// Build one card entry with its highlight flags.
fn card_entry(id: usize, c: &Card, hand: &Classification) -> Value {
    json!({
        "id": id,
        "card": to_client_card(c),
        "rank": c.rank().symbol(),
        "suit": c.suit().name(),
        "isCombination": hand.active_cards.contains(c),
        "isKicker": hand.kickers.contains(c)
    })
}

/// Probability rows strongest category first, as the probabilities panel lists them.
fn probability_rows(probabilities: &ProbabilityMap) -> Value {
    let rows: Vec<Value> = probabilities
        .iter()
        .rev()
        .map(|(category, p)| {
            json!({
                "ranking": category.name(),
                "probability": p,
                "percent": format!("{:.2}", p * 100.0)
            })
        })
        .collect();
    Value::Array(rows)
}

/// Map a classified hand and its next-card odds to the JSON object the
/// presentation layer renders.
///
/// `cards` keeps the caller's display order (hole cards first, then board);
/// every card is flagged when it is active or a kicker.
pub fn to_hand_view(cards: &[Card], hand: &Classification, probabilities: &ProbabilityMap) -> Value {
    let entries: Vec<Value> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| card_entry(i, c, hand))
        .collect();

    json!({
        "hand": {
            "short_name": hand.short_name,
            "long_name": hand.long_name,
            "cards": entries,
            "active_count": hand.active_cards.len(),
            "kicker_count": hand.kickers.len()
        },
        "probabilities": probability_rows(probabilities)
    })
}

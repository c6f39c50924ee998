//! Walk a dealt hand street by street, then re-deal until a target ranking.
//!
//! Run with: `cargo run --example streak -- "Full House"`
//!
//! Set `RUST_LOG=debug` to see the engine's classification and estimator logs.
//!
//! This example shows how a presentation layer drives `poker_hand_rank`:
//!
//! 1. **Street walk**: one seeded deal is classified on the pre-flop, flop,
//!    turn and river, with the next-card odds for each street.
//! 2. **Re-deal until**: fresh unseeded deals are classified on the river
//!    until the requested category shows up, counting the re-deals.
//! 3. **View payload**: the final hand is printed as the JSON object the UI
//!    renders.

use poker_hand_rank::{
    to_hand_view, Deal, DealRequest, EstimatorConfig, HandCategory, Street,
};

/// Print one street: visible cards, ranking, and the likeliest next categories.
fn print_street(deal: &Deal, street: Street, config: &EstimatorConfig) -> poker_hand_rank::Result<()> {
    let cards: Vec<String> = deal.visible_cards(street).iter().map(|c| c.to_string()).collect();
    let hand = deal.classify(street)?;
    let odds = deal.next_card_probabilities(street, config)?;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{street}]  {}", cards.join(", "));
    println!("  Ranking: {}", hand.long_name);
    let kickers: Vec<String> = hand.kickers.iter().map(|c| c.to_string()).collect();
    if !kickers.is_empty() {
        println!("  Kickers: {}", kickers.join(", "));
    }
    println!("  Next card:");
    for (category, p) in odds.iter().rev().filter(|&(_, p)| p > 0.0) {
        println!("    {:<16} {:>6.2}%", category.name(), p * 100.0);
    }
    Ok(())
}

fn main() -> poker_hand_rank::Result<()> {
    env_logger::init();

    let target = std::env::args()
        .nth(1)
        .and_then(|name| HandCategory::from_name(&name))
        .unwrap_or(HandCategory::FullHouse);
    let config = EstimatorConfig::default();

    let deal = Deal::new(DealRequest::seeded(42))?;
    for street in Street::streets() {
        print_street(&deal, street, &config)?;
    }
    println!();

    let mut redeals = 0u32;
    let (deal, hand) = loop {
        redeals += 1;
        let deal = Deal::new(DealRequest::default())?;
        let hand = deal.classify(Street::River)?;
        if hand.category == target {
            break (deal, hand);
        }
    };
    println!("  {}", hand.long_name);
    println!("  Redealt {redeals} time{}", if redeals == 1 { "" } else { "s" });

    let cards = deal.visible_cards(Street::River);
    let odds = deal.next_card_probabilities(Street::River, &config)?;
    let view = to_hand_view(&cards, &hand, &odds);
    println!("{}", serde_json::to_string_pretty(&view).unwrap_or_default());
    Ok(())
}

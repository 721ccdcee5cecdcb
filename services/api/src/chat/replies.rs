/// Keyword rules, checked in order against the lowercased message.
const RULES: &[(&[&str], &str)] = &[
    (
        &["eat"],
        "I recommend trying the local bistro for authentic cuisine!",
    ),
    (
        &["pharmacy"],
        "The nearest pharmacy is 200m from your location.",
    ),
    (
        &["events", "happening"],
        "There is a local festival happening downtown today!",
    ),
    (
        &["adventure"],
        "For adventure, I recommend Rishikesh, Interlaken, or Queenstown!",
    ),
    (&["beach"], "🌴 Beaches? Try Maldives, Goa, or Phuket!"),
    (
        &["mountain"],
        "⛰️ Mountains? Swiss Alps, Manali, or Banff are amazing!",
    ),
    (
        &["festival"],
        "🎉 Festivals? Rio Carnival, Hornbill Festival, or Oktoberfest!",
    ),
];

pub const DEFAULT_REPLY: &str = "I'm here to help with your trip! Ask me anything.";

pub fn reply_for(message: &str) -> &'static str {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

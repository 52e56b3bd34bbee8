/// Action vocabularies. Fixed configuration tables, English plus the French
/// synonyms the app's users actually type — not a localization framework.
const BUY_ACTIONS: &[&str] = &["buy", "purchase", "acheter"];
const RENT_ACTIONS: &[&str] = &["rent", "lease", "louer"];

/// A clear transaction intent extracted from the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Buy,
    Rent,
}

/// Classify a normalized action word against the known vocabularies.
/// Anything unrecognized (including "find" and the empty string) means the
/// user must be asked to clarify.
pub fn classify_action(action: Option<&str>) -> Option<Intent> {
    let action = action?.trim().to_lowercase();
    if BUY_ACTIONS.contains(&action.as_str()) {
        Some(Intent::Buy)
    } else if RENT_ACTIONS.contains(&action.as_str()) {
        Some(Intent::Rent)
    } else {
        None
    }
}

/// Build the criteria-extraction instruction for one user query.
pub fn extraction_prompt(user_message: &str) -> String {
    format!(
        "Parse this property search query and return the criteria as a JSON object \
         with exactly these keys: action, location, property_type, rooms, budget, features. \
         Use null for any criterion that is not mentioned and an empty array for features \
         when none are given. Return only the JSON object, with no other text.\n\n\
         Query: '{user_message}'"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_query() {
        let prompt = extraction_prompt("acheter un T3 à Lyon");
        assert!(prompt.contains("'acheter un T3 à Lyon'"));
    }

    #[test]
    fn prompt_names_all_six_keys() {
        let prompt = extraction_prompt("anything");
        for key in ["action", "location", "property_type", "rooms", "budget", "features"] {
            assert!(prompt.contains(key), "missing key {key}");
        }
    }
}

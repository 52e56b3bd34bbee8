/// Strip markdown code blocks from a model response.
///
/// Models frequently wrap JSON answers in ```json fences even when told not
/// to. Absence of fencing is a no-op.
pub fn strip_code_blocks(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

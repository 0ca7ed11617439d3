use crate::request::NamingRequest;

static NAMER_SYSTEM_PROMPT: &str = "You are an expert in recommending baby names. Please suggest suitable names based on the provided criteria.";

static NAMER_PROMPT: &str = r#"Suggest 5 {gender} baby names that go well with the last name '{surname}' and fit a {style} style.
Exclude the last name '{surname}' from the suggested names and recommend {length} names.
Each name should be meaningful, modern, and have positive associations.
{repetition}
Provide each name as a JSON object in this format:
{
    "Name": "Suggested name",
    "Meaning": "Brief meaning or origin of the name",
    "Characteristics": "Explanation of the name's characteristics or related trends"
}

Return the result as a JSON array following the above format."#;

static NAMER_PROMPT_REPETITION: &str = "Create 5 names that include the syllable '{syllable}' either at the beginning or the end of the name. Then, select the 5 names that best match with the last name '{surname}'.";

/// Fixed role instruction, independent of the request.
pub fn namer_system_prompt() -> String {
    NAMER_SYSTEM_PROMPT.to_string()
}

/// Build the user prompt for one naming request. Deterministic, no I/O: the
/// same request always yields the same string.
pub fn naming_prompt(request: &NamingRequest) -> String {
    let repetition = match &request.repeated_syllable {
        Some(syllable) => NAMER_PROMPT_REPETITION
            .replace("{syllable}", syllable)
            .replace("{surname}", &request.surname),
        None => String::new(),
    };

    NAMER_PROMPT
        .replace("{gender}", request.gender.noun())
        .replace("{style}", request.style.phrase())
        .replace("{length}", request.length.phrase())
        .replace("{repetition}", &repetition)
        .replace("{surname}", &request.surname)
}

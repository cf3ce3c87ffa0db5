//! Prompt template for the text-generation service

/// Build the extraction prompt for one normalized description
///
/// Fixed template: format specification, the description, the four rules,
/// and two worked examples. The service is expected to answer with one JSON
/// object somewhere in its output; the parser tolerates surrounding prose.
pub fn build_extraction_prompt(text: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(FORMAT_INSTRUCTIONS);
    prompt.push_str("\n\nDescription: ");
    prompt.push_str(text);
    prompt.push_str("\n\n");
    prompt.push_str(RULES);
    prompt.push_str("\n\n");
    prompt.push_str(WORKED_EXAMPLES);

    prompt
}

const FORMAT_INSTRUCTIONS: &str = r#"Extract product information from this German material description in JSON format:
{
    "product_name": "main product name",
    "characteristics": ["key specs"],
    "material_type": "type",
    "unit_of_measure": "ST",
    "categorization": {},
    "short_description": "concise description under 40 chars"
}"#;

const RULES: &str = r#"Rules:
1. Keep short_description under 40 characters
2. Include key distinguishing features
3. For items starting with "für", include what it's for in the name
4. Preserve part numbers and specifications"#;

const WORKED_EXAMPLES: &str = r#"Example:
Input: "für APIC Wasserfilter FMA 9000 | Ref: 9000/CPF01/230/VH | Pos. 48"
Output: {
    "product_name": "APIC Wasserfilter FMA 9000",
    "characteristics": ["Ref: 9000/CPF01/230/VH", "Pos. 48"],
    "material_type": "filter",
    "unit_of_measure": "ST",
    "categorization": {},
    "short_description": "APIC Wasserfilter FMA 9000"
}

Input: "Siemens Schütz | Spulensp. 230V, 50HZ/AC | Leistung 45,0 KW/400V"
Output: {
    "product_name": "Siemens Schütz",
    "characteristics": ["230V, 50HZ/AC", "45,0 KW/400V"],
    "material_type": "electrical",
    "unit_of_measure": "ST",
    "categorization": {
        "Spannung (V)": "230",
        "Leistung (kW)": "45.0"
    },
    "short_description": "Siemens Schütz 230V 45KW"
}"#;

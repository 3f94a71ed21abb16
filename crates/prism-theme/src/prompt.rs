//! Prompt text and the structured-output schema sent with it.

use crate::error::ThemeError;
use serde_json::{json, Value};

/// Trims the user's prompt; an empty prompt never reaches the service.
pub fn normalize_prompt(prompt: &str) -> Result<&str, ThemeError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(ThemeError::EmptyPrompt);
    }
    Ok(trimmed)
}

pub fn build_prompt(mood: &str) -> String {
    format!(
        "Generate a visual theme for a 3D abstract scene based on this mood/idea: \"{}\".\n\
         Return a JSON object containing color codes (hex), material properties, shape choices.\n\
         For colors, ensure they are valid 6-digit hex codes.",
        mood
    )
}

/// Response schema in the service's OpenAPI-subset format.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "themeName": { "type": "STRING", "description": "A creative name for the theme" },
            "description": { "type": "STRING", "description": "Short explanation of the visual choices" },
            "config": {
                "type": "OBJECT",
                "properties": {
                    "color": { "type": "STRING", "description": "Main object hex color" },
                    "bgColor": { "type": "STRING", "description": "Background hex color" },
                    "lightColor": { "type": "STRING", "description": "Light source hex color" },
                    "lightIntensity": { "type": "NUMBER", "description": "Light intensity between 0.5 and 3" },
                    "metalness": { "type": "NUMBER", "description": "Material metalness 0-1" },
                    "roughness": { "type": "NUMBER", "description": "Material roughness 0-1" },
                    "shape": {
                        "type": "STRING",
                        "enum": ["Box", "Torus", "Icosahedron", "Octahedron", "Knot"],
                        "description": "The geometric shape type"
                    },
                    "material": {
                        "type": "STRING",
                        "enum": ["Standard", "Physical", "Wireframe"],
                        "description": "The material shader type"
                    },
                    "rotationSpeed": { "type": "NUMBER", "description": "Self-rotation speed between 0 and 2" },
                    "scale": { "type": "NUMBER", "description": "Scale of the object (0.5 to 2.5)" }
                },
                "required": ["color", "bgColor", "metalness", "roughness", "shape"]
            }
        },
        "required": ["themeName", "config"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompts_are_rejected() {
        assert!(matches!(normalize_prompt("   "), Err(ThemeError::EmptyPrompt)));
        assert_eq!(normalize_prompt("  calm ocean ").unwrap(), "calm ocean");
    }

    #[test]
    fn prompt_embeds_the_mood() {
        assert!(build_prompt("Cyberpunk City").contains("\"Cyberpunk City\""));
    }

    #[test]
    fn schema_requires_the_mandatory_config_fields() {
        let schema = response_schema();
        let required = schema["properties"]["config"]["required"].as_array().unwrap();
        for field in ["color", "bgColor", "metalness", "roughness", "shape"] {
            assert!(required.iter().any(|v| v == field));
        }
    }
}

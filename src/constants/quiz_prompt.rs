/// Instruction template for multiple-choice quiz generation. The `{context}`
/// marker is replaced with the assembled document context before the prompt is
/// sent. The JSON skeleton below is the only output contract the model is
/// given.
pub const QUIZ_GENERATION_PROMPT: &str = r#"You are a quiz generator. Create exactly 5 multiple-choice questions based on the following content.

Rules:
1. Each question must have exactly 4 options labeled A, B, C, and D.
2. Only one option should be correct.
3. All options must be plausible.
4. Include a brief explanation for the correct answer.

Content to base questions on:
{context}

Respond with ONLY the following JSON structure and nothing else (no prose, no markdown fences):
{
    "questions": [
        {
            "question": "Write the question here",
            "options": {
                "A": "First option",
                "B": "Second option",
                "C": "Third option",
                "D": "Fourth option"
            },
            "correct_answer": "A",
            "explanation": "Explain why this is correct"
        }
    ]
}"#;

/// Marker substituted by the prompt builder.
pub const CONTEXT_MARKER: &str = "{context}";

//! Prompt for structured résumé extraction.

pub const RESUME_PARSE_PROMPT: &str = r#"Extract the following details from the resume and return them in valid JSON format. Do not include any markdown, code blocks, or additional text outside the JSON object. The response must be parseable by a JSON parser. Return an object with these keys:
1. employment_details: List of objects with "title" and "company"
2. technical_skills: List of skills
3. soft_skills: List of skills
4. qualification: Highest qualification or education details if available

Example output:
{
  "employment_details": [{"title": "Software Engineer", "company": "Example Corp"}],
  "technical_skills": ["Python", "Java"],
  "soft_skills": ["Communication", "Teamwork"],
  "qualification": "Bachelor's in Computer Science"
}

Resume:
{resume_text}"#;

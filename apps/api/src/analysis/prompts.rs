//! Prompt for the skill-gap narration call.

pub const GAP_ANALYSIS_PROMPT: &str = r#"You are an expert career coach. Below are two pieces of information:

1. A list of the top job roles and their required skills, formatted as a list of dictionaries:
{jobs_json}

2. A list of the user's skills:
{user_skills_json}

For each job, do the following:
- List the skills the user has that match the job's requirements ("Matching Skills").
- List the skills required for the job that the user does not have ("Skill Gaps").

Please present your analysis clearly, job by job, using two sections per job: 1. Matching Skills, 2. Skill Gaps."#;

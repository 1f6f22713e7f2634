// Cover letter prompt template.
// Replace: {job_title}, {company_name}, {name}, {email}, {today},
//          {industry}, {experience_level}, {skills}, {job_description}

pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are an expert career coach. Write a complete, ready-to-send cover letter
for the position of **{job_title}** at **{company_name}**.

Applicant details:
- Name: {name}
- Email: {email}
- Date: {today}
- Industry: {industry}
- Experience Level: {experience_level}
- Skills: {skills}

Job Description:
{job_description}

Requirements:
1. The letter must be fully filled out and ready to send.
2. Do NOT include any placeholders or bracketed text like [Your Name], [Email], [Phone Number], [Current Date], etc.
3. Use a professional, enthusiastic tone.
4. Highlight the most relevant skills and experience for this role.
5. Show understanding of the company's needs.
6. Keep it concise (max ~400 words).
7. Use proper business letter formatting in markdown.
8. At the end of the letter, sign with the candidate's real name: {name}.
9. Use the real date "{today}" where a date is needed.
10. You may omit phone number and physical address if they are not provided. Do NOT invent random contact info.

Return ONLY the markdown cover letter, nothing else."#;

pub struct CoverLetterPromptArgs<'a> {
    pub job_title: &'a str,
    pub company_name: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub today: &'a str,
    pub industry: &'a str,
    pub experience_level: &'a str,
    pub skills: &'a str,
    pub job_description: &'a str,
}

pub fn cover_letter_prompt(args: &CoverLetterPromptArgs) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_title}", args.job_title)
        .replace("{company_name}", args.company_name)
        .replace("{name}", args.name)
        .replace("{email}", args.email)
        .replace("{today}", args.today)
        .replace("{industry}", args.industry)
        .replace("{experience_level}", args.experience_level)
        .replace("{skills}", args.skills)
        .replace("{job_description}", args.job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_placeholders_substituted() {
        let prompt = cover_letter_prompt(&CoverLetterPromptArgs {
            job_title: "Staff Engineer",
            company_name: "Acme",
            name: "Sam",
            email: "sam@example.com",
            today: "January 5, 2026",
            industry: "Technology",
            experience_level: "Senior",
            skills: "Go, Rust",
            job_description: "Build things.",
        });
        assert!(prompt.contains("**Staff Engineer** at **Acme**"));
        assert!(prompt.contains("real name: Sam."));
        assert!(!prompt.contains('{'));
    }
}

//! Prompt templates, one per content type.

use crate::models::{
    BlogPostParams, ContentGenerationParams, EmailNewsletterParams, PressReleaseParams,
    ProductDescriptionParams, SocialMediaParams,
};

/// Render the prompt for a generation request.
pub fn render_prompt(params: &ContentGenerationParams) -> String {
    match params {
        ContentGenerationParams::BlogPost(p) => blog_post(p),
        ContentGenerationParams::SocialMedia(p) => social_media(p),
        ContentGenerationParams::ProductDescription(p) => product_description(p),
        ContentGenerationParams::EmailNewsletter(p) => email_newsletter(p),
        ContentGenerationParams::PressRelease(p) => press_release(p),
    }
}

/// Prompt for the analysis endpoint.
pub fn analysis_prompt(content: &str) -> String {
    format!("Analyze the following content and provide feedback:\n\n{}", content)
}

/// Social-media parameters asking for a reply of at most 100 characters.
pub fn short_reply_params(prompt: &str) -> ContentGenerationParams {
    ContentGenerationParams::SocialMedia(SocialMediaParams {
        platform: "generic".to_string(),
        goal: format!(
            "Respond in no more than 100 characters to the following: {}",
            prompt
        ),
        target_audience: "general".to_string(),
    })
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn blog_post(p: &BlogPostParams) -> String {
    format!(
        "Write a comprehensive blog post on the topic: \"{topic}\".\n\
         Incorporate the following keywords: {keywords}.\n\
         Structure the post with an engaging introduction, 3-5 main points with subheadings, and a conclusion.\n\
         Use a conversational yet informative tone, and include relevant examples or statistics where appropriate.\n\
         Aim for a word count of approximately 800-1200 words.\n",
        topic = p.topic,
        keywords = p.keywords.join(", "),
    )
}

fn social_media(p: &SocialMediaParams) -> String {
    format!(
        "Create a {platform} post with the goal of {goal}.\n\
         Target audience: {audience}\n\
         Use an appropriate tone and style for {platform}.\n\
         Include relevant hashtags and a call-to-action.\n\
         Keep the content concise and engaging, optimized for {platform}'s best practices.\n",
        platform = p.platform,
        goal = p.goal,
        audience = p.target_audience,
    )
}

fn product_description(p: &ProductDescriptionParams) -> String {
    format!(
        "Write a compelling product description for {name}.\n\
         Key features:\n{features}\n\
         Key benefits:\n{benefits}\n\
         Highlight the unique selling points and how the product solves customer problems.\n\
         Use persuasive language and sensory details where appropriate.\n\
         Include a strong call-to-action at the end.\n",
        name = p.product_name,
        features = bullets(&p.features),
        benefits = bullets(&p.benefits),
    )
}

fn email_newsletter(p: &EmailNewsletterParams) -> String {
    format!(
        "Craft an engaging email newsletter on the subject: \"{subject}\"\n\
         Key points to cover:\n{points}\n\
         Target audience: {audience}\n\
         Use a friendly yet professional tone. Start with an attention-grabbing opening.\n\
         Break the content into scannable sections with subheadings.\n\
         Include a clear call-to-action and sign off with a personal touch.\n",
        subject = p.subject,
        points = bullets(&p.key_points),
        audience = p.audience,
    )
}

fn press_release(p: &PressReleaseParams) -> String {
    let quotes = p
        .quotes
        .iter()
        .map(|q| format!("- \"{}\"", q))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Write a press release for the following announcement: \"{announcement}\"\n\
         Company Information: {company}\n\
         Include the following quotes:\n{quotes}\n\
         Follow the inverted pyramid structure: start with the most important information.\n\
         Use a formal, objective tone. Include a dateline and 'For Immediate Release' at the top.\n\
         End with contact information and a brief company boilerplate.\n",
        announcement = p.announcement,
        company = p.company_info,
        quotes = quotes,
    )
}

//! Prompt templates for the news and script operations

/// Prompt asking for a short factual news report on `topic`
pub fn news_prompt(topic: &str) -> String {
    format!(
        "\nYou are a professional live news reporter with real-time access.\n\
Find and report the latest real-world news updates about: '{topic}'.\n\
Keep it factual, current, and professional.\n\
Summarize in around 150–200 words.\n\
Start immediately with the news content. No greetings.\n\
If no recent news is available, say: \"No recent updates found on {topic}\".\n"
    )
}

/// Prompt turning a news summary into a short-form video script
pub fn script_prompt(news_text: &str) -> String {
    format!(
        "\nYou are a creative scriptwriter.\n\
Turn this real-time news into an engaging short video script (YouTube Shorts or Instagram Reels).\n\
Write in a natural, speaking style, with a hook at the beginning and a CTA at the end.\n\
Keep it around 100–120 words:\n\
\n\
{news_text}\n"
    )
}

use super::model::{Author, PostDataset, ScoredPost};

// ---------------------------------------------------------------------------
// Built-in sample set shown until the user opens a file
// ---------------------------------------------------------------------------

const SAMPLE_POSTS: &[(&str, &str, &str, f64)] = &[
    ("Rag Pil", "@rag_pil", "This is amazing! I love this!", 1.0),
    ("Tech Enthusiast", "@tech_enthusiast", "Incredible innovation! Can't wait to see more.", 0.9),
    ("Skeptic", "@skeptic123", "I'm not convinced. Needs more evidence.", 0.2),
    ("Future Thinker", "@future_thinker", "This could revolutionize the industry!", 0.8),
    ("Pragmatic User", "@pragmatic_user", "Interesting concept, but how practical is it?", 0.5),
    ("Innovator X", "@innovator_x", "Brilliant execution of a complex idea.", 0.9),
    ("Cautious Observer", "@cautious_observer", "Let's not get ahead of ourselves. Still many questions.", 0.3),
    ("Excited Newbie", "@excited_newbie", "Mind-blowing! This is why I love technology!", 1.0),
    ("Industry Veteran", "@industry_veteran", "Seen similar ideas fail. Not optimistic.", 0.1),
    ("Curious Mind", "@curious_mind", "Fascinating approach! How does it handle [specific scenario]?", 0.7),
    ("Tech Critic", "@tech_critic", "Overhyped. Doesn't solve the real problem.", 0.0),
    ("Forward Thinker", "@forward_thinker", "This could be a game-changer for our field!", 0.9),
    ("Practical Dev", "@practical_dev", "Solid implementation. Looking forward to testing it.", 0.8),
    ("UI Lover", "@ui_lover", "The interface is so intuitive! Great user experience.", 1.0),
    ("Security Expert", "@security_expert", "Promising, but what about the security implications?", 0.6),
    ("Optimistic Coder", "@optimistic_coder", "This opens up so many possibilities! Excited to explore.", 0.95),
    ("Data Scientist", "@data_scientist", "Impressive results. Would love to see the methodology.", 0.85),
    ("UX Designer", "@ux_designer", "Clean design, but accessibility could be improved.", 0.65),
    ("Startup Founder", "@startup_founder", "Game-changing potential. How soon can we implement?", 0.9),
    ("Ethical Tech", "@ethical_tech", "Innovative, but we need to consider the ethical implications.", 0.55),
    ("AI Researcher", "@ai_researcher", "Fascinating approach. Curious about the training data.", 0.75),
    ("Skeptical User", "@skeptical_user", "Sounds too good to be true. What's the catch?", 0.25),
    ("Tech Journalist", "@tech_journalist", "Groundbreaking if it delivers. Looking forward to testing.", 0.7),
    ("Product Manager", "@product_manager", "Great concept. How does it fit into existing workflows?", 0.8),
    ("Privacy Advocate", "@privacy_advocate", "Innovative, but raises serious privacy concerns.", 0.4),
    ("Tech Optimist", "@tech_optimist", "This is the future! Can't wait to see it in action.", 0.95),
    ("Cautious Adopter", "@cautious_adopter", "Interesting, but I'll wait for more real-world testing.", 0.5),
    ("Industry Analyst", "@industry_analyst", "Potential disruptor. Keeping a close eye on developments.", 0.75),
    ("Tech Skeptic", "@tech_skeptic", "Seen similar promises before. Doubtful it'll deliver.", 0.15),
    ("Enthusiastic Dev", "@enthusiastic_dev", "Can't wait to get my hands on this! So many possibilities!", 0.95),
];

/// The 30 replies bundled with the dashboard.
pub fn sample_dataset() -> PostDataset {
    let posts = SAMPLE_POSTS
        .iter()
        .filter_map(|&(name, handle, reply, sentiment)| {
            ScoredPost::new(Author::new(name, handle), reply, sentiment).ok()
        })
        .collect();
    PostDataset::from_posts(posts)
}

//! Plain-text views of marketplace data

use skillhub_types::{Favorite, PaginatedResponse, Skill, User};

/// Which optional content blocks to include in the detail view
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailSections {
    pub readme: bool,
    pub skill_md: bool,
}

/// `1234567` → `1,234,567`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn price_label(skill: &Skill) -> String {
    if skill.requires_purchase() {
        format!("${}", skill.price)
    } else {
        "Free".to_string()
    }
}

/// One row of `skills list`
pub fn skill_line(skill: &Skill) -> String {
    format!(
        "{:<36} {:<28} ★ {:>7}  {:>8}  {}",
        skill.id,
        skill.name,
        format_count(skill.stars),
        price_label(skill),
        skill.repository()
    )
}

pub fn page_footer<T>(page: &PaginatedResponse<T>) -> String {
    format!(
        "page {}/{} ({} skills)",
        page.page,
        page.total_pages,
        format_count(page.total)
    )
}

pub fn not_found(id: &str) -> String {
    format!("Skill '{id}' not found.")
}

/// Full detail view of a skill
pub fn skill_detail(skill: &Skill, sections: DetailSections) -> String {
    let mut lines = Vec::new();

    let mut title = skill.name.clone();
    if let Some(language) = &skill.language {
        title.push_str(&format!(" [{language}]"));
    }
    if skill.marketplace {
        title.push_str(" [Verified]");
    }
    lines.push(title);
    lines.push(format!("by {}", skill.repository()));
    lines.push(format!(
        "★ {} stars · {} forks · {} downloads",
        format_count(skill.stars),
        format_count(skill.forks),
        format_count(skill.downloaded_count)
    ));
    lines.push(String::new());
    lines.push(
        skill
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "No description available for this skill.".to_string()),
    );

    lines.push(String::new());
    lines.push("Installation".to_string());
    match &skill.install_command {
        Some(cmd) if !cmd.is_empty() => lines.push(format!("  {cmd}")),
        _ => lines.push("  No installation command available.".to_string()),
    }

    if sections.readme {
        lines.push(String::new());
        lines.push("README".to_string());
        lines.push(optional_block(
            skill.readme_content.as_deref(),
            "No README available for this skill.",
        ));
    }

    if sections.skill_md {
        lines.push(String::new());
        lines.push("SKILL.md".to_string());
        lines.push(optional_block(
            skill.skill_content.as_deref(),
            "No SKILL.md available for this skill.",
        ));
    }

    if !skill.tags.is_empty() {
        lines.push(String::new());
        lines.push(format!("Tags: {}", skill.tags.join(", ")));
    }

    lines.push(String::new());
    if skill.requires_purchase() {
        lines.push(format!("${} One-time purchase", skill.price));
        lines.push(format!("  Buy: sign in, then open /skills/{}", skill.id));
    } else {
        lines.push("Free to use".to_string());
        lines.push(format!("  Install: skillhub skills download {}", skill.id));
    }
    lines.push(format!("View on GitHub: {}", skill.github_url()));

    lines.push(String::new());
    lines.push("Information".to_string());
    lines.push(format!("  Owner       {}", skill.github_owner));
    lines.push(format!("  Repository  {}", skill.github_repo));
    if let Some(language) = &skill.language {
        lines.push(format!("  Language    {language}"));
    }
    lines.push(format!(
        "  Downloads   {}",
        format_count(skill.downloaded_count)
    ));
    if let Some(synced) = skill.last_synced_at {
        lines.push(format!("  Last Updated {}", synced.format("%Y-%m-%d")));
    }

    lines.join("\n")
}

fn optional_block(content: Option<&str>, fallback: &str) -> String {
    content
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}

pub fn favorite_line(favorite: &Favorite) -> String {
    match &favorite.skill {
        Some(skill) => format!("{}  {} ({})", favorite.id, skill.name, skill.repository()),
        None => format!("{}  skill {}", favorite.id, favorite.skill_id),
    }
}

pub fn user_summary(user: &User) -> String {
    format!(
        "{} <{}> · {} · signed in via {}",
        user.display_name(),
        user.email,
        user.role,
        user.provider
    )
}

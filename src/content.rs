//! Campus awareness material shown alongside the calculator

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

pub const SITE_TITLE: &str = "Carbon Footprint Aware";

pub const HERO_HEADLINE: &str = "Reduce Your Campus Carbon Footprint";

pub const HERO_TEXT: &str = "Learn about carbon emissions from fuel-powered machines on campus \
and discover how you can make a positive impact on our shared environment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Understanding carbon emissions
    Intro,
    /// Health and ethical impact
    Impact,
    /// Tips for students
    Tips,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Intro, Section::Impact, Section::Tips];

    pub fn title(self) -> &'static str {
        match self {
            Section::Intro => "Understanding Carbon Emissions",
            Section::Impact => "Health & Ethical Impact",
            Section::Tips => "Tips for Students",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Section::Intro => {
                "Carbon emissions are gases released into the atmosphere when fossil fuels \
                 are burned. Here's what you need to know."
            }
            Section::Impact => {
                "Your carbon emissions extend beyond personal impact - they affect the \
                 entire campus community and environment."
            }
            Section::Tips => {
                "Simple, practical ways you can reduce your carbon footprint on campus today."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Point {
    pub heading: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImpactCard {
    pub title: &'static str,
    pub points: &'static [Point],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TipCategory {
    pub title: &'static str,
    pub tips: &'static [&'static str],
}

pub const INTRO_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "What Are They?",
        body: "Carbon emissions are greenhouse gases, primarily CO₂, released when burning \
               fossil fuels like petrol, diesel, and kerosene in generators and vehicles.",
    },
    InfoCard {
        title: "Common Sources",
        body: "On campus, main sources include generators for backup power, motorcycles for \
               transportation, and other fuel-powered equipment used daily.",
    },
    InfoCard {
        title: "Why It Matters",
        body: "These emissions contribute to climate change, air pollution, and can cause \
               respiratory problems, especially in enclosed campus environments.",
    },
];

pub const IMPACT_CARDS: &[ImpactCard] = &[
    ImpactCard {
        title: "Community Health Impact",
        points: &[
            Point {
                heading: "Respiratory Issues",
                text: "Fumes can trigger asthma and breathing problems in sensitive individuals",
            },
            Point {
                heading: "Air Quality",
                text: "Reduces overall air quality in dormitories, libraries, and study areas",
            },
            Point {
                heading: "Vulnerable Groups",
                text: "Particularly affects students with pre-existing health conditions",
            },
        ],
    },
    ImpactCard {
        title: "Ethical Responsibility",
        points: &[
            Point {
                heading: "Shared Environment",
                text: "The campus is a shared space that we all have a duty to protect",
            },
            Point {
                heading: "Future Generations",
                text: "Reducing emissions helps preserve the environment for future students",
            },
            Point {
                heading: "Leadership Role",
                text: "As educated individuals, we should model sustainable behavior",
            },
        ],
    },
];

pub const TIP_CATEGORIES: &[TipCategory] = &[
    TipCategory {
        title: "Energy Conservation",
        tips: &[
            "Turn off generators when not needed",
            "Use energy-efficient appliances",
            "Unplug devices when not in use",
            "Optimize generator usage schedules",
        ],
    },
    TipCategory {
        title: "Transportation",
        tips: &[
            "Use public transportation",
            "Share rides with classmates",
            "Walk or cycle for short distances",
            "Maintain vehicles properly",
        ],
    },
    TipCategory {
        title: "Community Action",
        tips: &[
            "Organize carpooling groups",
            "Advocate for cleaner alternatives",
            "Share awareness with friends",
            "Support renewable energy initiatives",
        ],
    },
    TipCategory {
        title: "Smart Usage",
        tips: &[
            "Use generators during off-peak hours",
            "Combine errands into single trips",
            "Choose cleaner fuel options",
            "Regular maintenance for efficiency",
        ],
    },
    TipCategory {
        title: "Alternative Options",
        tips: &[
            "Explore solar power options",
            "Use power banks for small devices",
            "Choose electric alternatives when available",
            "Support campus green initiatives",
        ],
    },
    TipCategory {
        title: "Lifestyle Changes",
        tips: &[
            "Plan activities to reduce trips",
            "Use digital resources over printed",
            "Choose products with less packaging",
            "Educate others about environmental impact",
        ],
    },
];

/// Render one section as plain text
pub fn render_section(section: Section) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_section(&mut out, section);
    out
}

/// Render the headline and every section
pub fn render_all() -> String {
    let mut out = format!("{}\n\n{}\n", HERO_HEADLINE, HERO_TEXT);
    for section in Section::ALL {
        out.push('\n');
        out.push_str(&render_section(section));
    }
    out
}

fn write_section(out: &mut String, section: Section) -> std::fmt::Result {
    writeln!(out, "=== {} ===", section.title())?;
    writeln!(out, "{}", section.summary())?;

    match section {
        Section::Intro => {
            for card in INTRO_CARDS {
                writeln!(out)?;
                writeln!(out, "{}", card.title)?;
                writeln!(out, "  {}", card.body)?;
            }
        }
        Section::Impact => {
            for card in IMPACT_CARDS {
                writeln!(out)?;
                writeln!(out, "{}", card.title)?;
                for point in card.points {
                    writeln!(out, "  {}: {}", point.heading, point.text)?;
                }
            }
        }
        Section::Tips => {
            for category in TIP_CATEGORIES {
                writeln!(out)?;
                writeln!(out, "{}", category.title)?;
                for tip in category.tips {
                    writeln!(out, "  • {}", tip)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips_have_six_categories_of_four() {
        assert_eq!(TIP_CATEGORIES.len(), 6);
        assert!(TIP_CATEGORIES.iter().all(|c| c.tips.len() == 4));
    }

    #[test]
    fn intro_section_lists_every_card() {
        let text = render_section(Section::Intro);
        assert!(text.starts_with("=== Understanding Carbon Emissions ==="));
        for card in INTRO_CARDS {
            assert!(text.contains(card.title), "missing {}", card.title);
        }
    }

    #[test]
    fn impact_section_renders_points() {
        let text = render_section(Section::Impact);
        assert!(text.contains("Ethical Responsibility"));
        assert!(text.contains("  Air Quality: Reduces overall air quality"));
    }

    #[test]
    fn tips_section_uses_bullets() {
        let text = render_section(Section::Tips);
        assert!(text.contains("  • Choose cleaner fuel options"));
    }

    #[test]
    fn render_all_includes_headline_and_sections() {
        let text = render_all();
        assert!(text.starts_with(HERO_HEADLINE));
        for section in Section::ALL {
            assert!(text.contains(section.title()));
        }
    }
}

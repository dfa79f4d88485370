use yew::prelude::*;

struct StatCard {
    title: &'static str,
    icon: &'static str,
    tone: &'static str,
    value: &'static str,
    progress: Option<u8>,
    badges: &'static [&'static str],
    caption: Option<&'static str>,
}

const STAT_CARDS: &[StatCard] = &[
    StatCard {
        title: "Safety Score",
        icon: "🛡",
        tone: "text-success",
        value: "85%",
        progress: Some(85),
        badges: &[],
        caption: Some("Overall safety rating for general population"),
    },
    StatCard {
        title: "Risk Factors",
        icon: "⚠",
        tone: "text-warning",
        value: "3",
        progress: None,
        badges: &["Age sensitivity", "Drug interactions"],
        caption: None,
    },
    StatCard {
        title: "Active Components",
        icon: "💊",
        tone: "text-info",
        value: "4",
        progress: None,
        badges: &[],
        caption: Some("Identified active pharmaceutical ingredients"),
    },
];

const BENEFITS: &[(&str, &str)] = &[
    (
        "Empowers Patients",
        "Provides clear, understandable information about medication composition and risks",
    ),
    (
        "Improves Transparency",
        "Makes complex pharmaceutical information accessible to everyone",
    ),
    (
        "Enhances Public Health",
        "Helps prevent adverse reactions and dangerous drug interactions",
    ),
];

const IMPACT: &[(&str, u8)] = &[
    ("Medication Errors Prevented", 78),
    ("Patient Confidence", 92),
    ("Healthcare Provider Adoption", 65),
];

const PROBLEM_STATEMENT: &str = "Many people consume medicines without fully understanding their \
    chemical composition or potential risks. Although doctors and pharmacists are trained to \
    evaluate drug safety, patients often rely on incomplete or unclear packaging information. \
    This leads to avoidable health issues, allergic reactions, or dangerous drug interactions.";

fn progress_width(value: u8) -> String {
    format!("width: {}%;", value.min(100))
}

fn progress_bar(value: u8) -> Html {
    html! {
        <div class="progress">
            <div class="progress__fill" style={progress_width(value)}></div>
        </div>
    }
}

fn render_stat_card(card: &StatCard) -> Html {
    html! {
        <div class="card glass stat-card">
            <div class="stat-card__header">
                <span class="stat-card__title">{card.title}</span>
                <span class={classes!("stat-card__icon", card.tone)}>{card.icon}</span>
            </div>
            <div class={classes!("stat-card__value", card.tone)}>{card.value}</div>
            if let Some(value) = card.progress {
                { progress_bar(value) }
            }
            if !card.badges.is_empty() {
                <div class="stat-card__badges">
                    { for card.badges.iter().map(|badge| html! { <span class="badge">{*badge}</span> }) }
                </div>
            }
            if let Some(caption) = card.caption {
                <p class="stat-card__caption">{caption}</p>
            }
        </div>
    }
}

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    html! {
        <section id="analysis" class="stats">
            <style>
                {r#"
                    .stats {
                        position: relative;
                        overflow: hidden;
                        padding: 5rem 1.5rem;
                        background: linear-gradient(to bottom, #0a0e1a, #111827);
                    }
                    .stats__container {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .stats__intro {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .stats__intro h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin-bottom: 1.5rem;
                    }
                    .stats__intro p {
                        font-size: 1.25rem;
                        color: #9ca3af;
                        max-width: 48rem;
                        margin: 0 auto;
                        line-height: 1.6;
                    }
                    .stats__grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 4rem;
                    }
                    .stats__pair {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                        gap: 2rem;
                    }
                    .stat-card__header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding-bottom: 0.5rem;
                    }
                    .stat-card__title {
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }
                    .stat-card__value {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .stat-card__badges {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.25rem;
                        margin-top: 0.5rem;
                    }
                    .stat-card__caption {
                        font-size: 0.75rem;
                        color: #9ca3af;
                        margin-top: 0.5rem;
                    }
                    .badge {
                        font-size: 0.75rem;
                        padding: 0.125rem 0.625rem;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 9999px;
                    }
                    .progress {
                        height: 0.5rem;
                        margin-top: 0.5rem;
                        background: rgba(255, 255, 255, 0.08);
                        border-radius: 9999px;
                        overflow: hidden;
                    }
                    .progress__fill {
                        height: 100%;
                        background: linear-gradient(90deg, #4facfe, #00f2fe);
                        transition: width 0.6s ease;
                    }
                    .benefit {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                    }
                    .benefit__dot {
                        flex-shrink: 0;
                        width: 0.5rem;
                        height: 0.5rem;
                        margin-top: 0.5rem;
                        border-radius: 50%;
                        background: #22c55e;
                    }
                    .benefit h4 {
                        margin: 0;
                        font-weight: 500;
                    }
                    .benefit p, .impact__label span:last-child {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        margin: 0;
                    }
                    .impact__row {
                        margin-bottom: 1rem;
                    }
                    .impact__label {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .impact__total {
                        padding-top: 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        text-align: center;
                    }
                    .impact__total strong {
                        font-size: 1.5rem;
                        color: #4facfe;
                    }
                    .stats__note {
                        display: flex;
                        justify-content: center;
                        margin-top: 4rem;
                    }
                    .stats__note span {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        padding: 0.5rem 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 9999px;
                    }
                "#}
            </style>
            <div class="stats__container">
                <div class="stats__intro">
                    <h2>{"Medicine Safety Analysis"}</h2>
                    <p>{PROBLEM_STATEMENT}</p>
                </div>

                <div class="stats__grid">
                    { for STAT_CARDS.iter().map(render_stat_card) }
                </div>

                <div class="stats__pair">
                    <div class="card glass">
                        <h3><span class="text-success">{"✓ "}</span>{"Key Benefits"}</h3>
                        { for BENEFITS.iter().map(|(title, text)| html! {
                            <div class="benefit">
                                <div class="benefit__dot"></div>
                                <div>
                                    <h4>{*title}</h4>
                                    <p>{*text}</p>
                                </div>
                            </div>
                        }) }
                    </div>

                    <div class="card glass">
                        <h3><span class="text-primary">{"👥 "}</span>{"Impact & Reach"}</h3>
                        { for IMPACT.iter().map(|(label, value)| html! {
                            <div class="impact__row">
                                <div class="impact__label">
                                    <span>{*label}</span>
                                    <span>{format!("{}%", value)}</span>
                                </div>
                                { progress_bar(*value) }
                            </div>
                        }) }
                        <div class="impact__total">
                            <strong>{"2.3M+"}</strong>
                            <p>{"Medicine analyses completed"}</p>
                        </div>
                    </div>
                </div>

                <div id="about" class="stats__note">
                    <span>{"ⓘ A system that can automatically analyze medicine composition and flag health risks"}</span>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_width_is_clamped() {
        assert_eq!(progress_width(85), "width: 85%;");
        assert_eq!(progress_width(0), "width: 0%;");
        assert_eq!(progress_width(250), "width: 100%;");
    }

    #[test]
    fn test_static_content() {
        assert_eq!(STAT_CARDS.len(), 3);
        assert_eq!(STAT_CARDS[0].progress, Some(85));
        assert_eq!(STAT_CARDS[1].badges, &["Age sensitivity", "Drug interactions"]);
        let impact: Vec<u8> = IMPACT.iter().map(|(_, v)| *v).collect();
        assert_eq!(impact, vec![78, 92, 65]);
        assert_eq!(BENEFITS.len(), 3);
    }
}

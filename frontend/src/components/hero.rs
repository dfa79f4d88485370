use log::info;
use yew::prelude::*;

use crate::analysis::AnalyzerHandle;
use crate::components::animated_text::AnimatedText;
use crate::components::wizard_modal::WizardModal;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    #[prop_or_default]
    pub analyzer: AnalyzerHandle,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let show_modal = use_state(|| false);

    let open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Opening analysis wizard");
            show_modal.set(true);
        })
    };

    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: ()| show_modal.set(false))
    };

    let words: Vec<AttrValue> = config::HERO_WORDS.iter().map(|w| AttrValue::from(*w)).collect();

    html! {
        <>
            <section id="home" class="hero grain">
                <style>
                    {r#"
                        .hero {
                            min-height: 100vh;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            position: relative;
                            overflow: hidden;
                            background: linear-gradient(135deg, rgba(10, 14, 26, 0.95), rgba(17, 24, 39, 0.9));
                        }
                        .hero__glow {
                            position: absolute;
                            border-radius: 50%;
                            filter: blur(64px);
                            animation: heroFloat 6s ease-in-out infinite;
                        }
                        .hero__glow--large {
                            top: 25%;
                            left: 25%;
                            width: 24rem;
                            height: 24rem;
                            background: rgba(79, 172, 254, 0.1);
                        }
                        .hero__glow--small {
                            bottom: 25%;
                            right: 25%;
                            width: 16rem;
                            height: 16rem;
                            background: rgba(0, 242, 254, 0.1);
                            animation-delay: 1s;
                        }
                        @keyframes heroFloat {
                            0%, 100% { transform: translateY(0); }
                            50% { transform: translateY(-20px); }
                        }
                        .hero__content {
                            position: relative;
                            z-index: 10;
                            max-width: 56rem;
                            padding: 0 1.5rem;
                            text-align: center;
                            animation: fadeIn 0.6s ease-out;
                        }
                        .hero__title {
                            font-size: clamp(3rem, 7vw, 4.5rem);
                            font-weight: 700;
                            line-height: 1.15;
                            margin: 0 0 2rem;
                        }
                        .hero__subtitle {
                            font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                            color: #9ca3af;
                            max-width: 42rem;
                            margin: 0 auto;
                            line-height: 1.6;
                        }
                        .hero__cta {
                            margin-top: 3rem;
                            padding: 1rem 2rem;
                            font-size: 1.125rem;
                            font-weight: 600;
                            border-radius: 9999px;
                            transition: all 0.3s ease;
                        }
                        .hero__cta:hover {
                            transform: scale(1.05);
                        }
                    "#}
                </style>
                <div class="hero__glow hero__glow--large"></div>
                <div class="hero__glow hero__glow--small"></div>

                <div class="hero__content">
                    <h1 class="hero__title">
                        <span>{"Keep Your Medicine"}</span>
                        <br />
                        <AnimatedText words={words} class="gradient-text" />
                    </h1>

                    <p class="hero__subtitle">
                        {"Understand your medication's composition, risks, and interactions. \
                          Empower yourself with comprehensive medicine safety analysis."}
                    </p>

                    <button class="btn-primary hero__cta" onclick={open_modal}>
                        {"Get Started"}
                    </button>
                </div>
            </section>

            <WizardModal
                open={*show_modal}
                on_close={close_modal}
                analyzer={props.analyzer.clone()}
            />
        </>
    }
}

use yew::prelude::*;

use crate::components::{hero::HeroSection, nav::FloatingNav, stats::StatsSection};

#[function_component(Index)]
pub fn index() -> Html {
    html! {
        <div class="page">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0a0e1a;
                    }
                    .page {
                        min-height: 100vh;
                        background: #0a0e1a;
                        color: #f3f4f6;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .glass {
                        background: rgba(255, 255, 255, 0.04);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .glass-strong {
                        background: rgba(17, 24, 39, 0.9);
                        backdrop-filter: blur(20px);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                    }
                    .card {
                        padding: 1.5rem;
                        border-radius: 12px;
                        transition: box-shadow 0.3s ease;
                    }
                    .card:hover {
                        box-shadow: 0 0 30px rgba(79, 172, 254, 0.15);
                    }
                    .gradient-text {
                        background: linear-gradient(135deg, #4facfe, #00f2fe);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .grain::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        opacity: 0.04;
                        background-image: radial-gradient(#fff 1px, transparent 1px);
                        background-size: 3px 3px;
                    }
                    .btn-primary, .btn-outline {
                        padding: 0.75rem 1.25rem;
                        border-radius: 8px;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .btn-primary {
                        background: linear-gradient(135deg, #4facfe, #00f2fe);
                        color: #0a0e1a;
                        border: 1px solid rgba(79, 172, 254, 0.2);
                    }
                    .btn-primary:hover:not(:disabled) {
                        box-shadow: 0 0 30px rgba(79, 172, 254, 0.4);
                    }
                    .btn-primary:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .btn-outline {
                        background: transparent;
                        color: inherit;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .text-primary { color: #4facfe; }
                    .text-success { color: #22c55e; }
                    .text-warning { color: #f59e0b; }
                    .text-danger { color: #ef4444; }
                    .text-info { color: #38bdf8; }
                    @keyframes fadeIn {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <FloatingNav />
            <HeroSection />
            <StatsSection />
        </div>
    }
}

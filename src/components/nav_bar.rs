//! Navigation Bar Component
//!
//! Fixed top bar with section links, booking button and mobile menu toggle.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dom::scroll_to_section;

/// Section links: (section id, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "首页"),
    ("services", "服务项目"),
    ("cases", "设计案例"),
    ("designers", "设计团队"),
    ("contact", "联系我们"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    let links_class = move || {
        if ctx.menu_open.get() {
            "nav-links open"
        } else {
            "nav-links"
        }
    };

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a
                    class="logo"
                    href="#home"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section("home");
                    }
                >
                    <i class="fas fa-couch"></i>
                    " 栖居设计工作室"
                </a>

                <ul class=links_class>
                    {NAV_LINKS.iter().map(|&(id, label)| view! {
                        <li>
                            <a
                                href=format!("#{}", id)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.close_menu();
                                    scroll_to_section(id);
                                }
                            >
                                {label}
                            </a>
                        </li>
                    }).collect_view()}
                    <li>
                        <button
                            class="btn-primary nav-cta"
                            on:click=move |_| {
                                ctx.close_menu();
                                ctx.open_appointment();
                            }
                        >
                            "预约咨询"
                        </button>
                    </li>
                </ul>

                <button class="mobile-menu-btn" aria-label="菜单" on:click=move |_| ctx.toggle_menu()>
                    <i class="fas fa-bars"></i>
                </button>
            </div>
        </nav>
    }
}

use chrono::DateTime;
use dioxus::prelude::*;
use scribble_core::models::User;
use scribble_ui::components::ui::{ButtonLink, ButtonVariant};
use scribble_ui::components::{Link, Main, MainContent, MainTitle, Prefetch, SearchBar};
use scribble_ui::{render_document_string, RequestContext};

use super::PageShell;

fn joined_on(created_at: i64) -> Option<String> {
    DateTime::from_timestamp_millis(created_at).map(|date| date.format("%B %-d, %Y").to_string())
}

#[derive(Props, Clone, PartialEq)]
struct UsersPageProps {
    context: RequestContext,
    query: String,
    users: Vec<User>,
}

#[allow(non_snake_case)]
fn UsersPage(props: UsersPageProps) -> Element {
    let UsersPageProps {
        context,
        query,
        users,
    } = props;
    let results: Vec<(String, String, String)> = users
        .iter()
        .map(|user| {
            (
                user.username.clone(),
                user.display_name().to_string(),
                user.image_src(),
            )
        })
        .collect();

    rsx! {
        PageShell { context, title: "Users | Scribble",
            Main {
                MainTitle { "Scribble Users" }
                MainContent {
                    SearchBar { default_value: query, autofocus: true }
                    if results.is_empty() {
                        p { class: "empty-state", "No users found" }
                    } else {
                        ul { class: "user-list",
                            for (username, display_name, image_src) in results {
                                li { key: "{username}",
                                    Link {
                                        to: "/users/{username}",
                                        prefetch: Prefetch::Intent,
                                        class: "user-card",
                                        img { class: "avatar", alt: "{display_name}", src: "{image_src}" }
                                        span { class: "user-card-name", "{display_name}" }
                                        span { class: "user-card-username", "{username}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_users_page(context: RequestContext, query: String, users: Vec<User>) -> String {
    render_document_string(
        context.theme,
        UsersPage,
        UsersPageProps {
            context,
            query,
            users,
        },
    )
}

#[derive(Props, Clone, PartialEq)]
struct ProfilePageProps {
    context: RequestContext,
    user: User,
}

#[allow(non_snake_case)]
fn ProfilePage(props: ProfilePageProps) -> Element {
    let ProfilePageProps { context, user } = props;
    let is_viewer = context.user.as_ref().is_some_and(|viewer| viewer.id == user.id);
    let display_name = user.display_name().to_string();
    let image_src = user.image_src();
    let username = user.username.clone();
    let joined = joined_on(user.created_at);
    let title = format!("{display_name} | Scribble");

    rsx! {
        PageShell { context, title,
            Main {
                MainContent {
                    div { class: "profile",
                        img { class: "profile-avatar", alt: "{display_name}", src: "{image_src}" }
                        h1 { "{display_name}" }
                        if let Some(joined) = joined {
                            p { class: "profile-joined", "Joined {joined}" }
                        }
                        if is_viewer {
                            ButtonLink { href: "/users/{username}/notes", "My notes" }
                        } else {
                            ButtonLink {
                                href: "/users/{username}/notes",
                                variant: ButtonVariant::Outline,
                                "{display_name}'s notes"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_profile_page(context: RequestContext, user: User) -> String {
    render_document_string(context.theme, ProfilePage, ProfilePageProps { context, user })
}

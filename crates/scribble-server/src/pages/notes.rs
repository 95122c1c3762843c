use dioxus::prelude::*;
use scribble_core::models::{Note, NoteDraftErrors, NoteId, OwnerNotes};
use scribble_ui::components::ui::{Button, ButtonVariant, Icon, IconName};
use scribble_ui::components::{
    FloatingToolbar, Link, Main, MainContent, MainTitle, Sidebar, SidebarNavItem, TextArea,
    TextField,
};
use scribble_ui::{render_document_string, RequestContext, RouteScope};

use super::PageShell;

/// Text the notes route shows when the owner does not exist
pub fn owner_not_found_message(username: &str) -> String {
    format!("No user with the username \"{username}\" exists")
}

pub fn note_not_found_message(note_id: &NoteId) -> String {
    format!("No note with the id \"{note_id}\" exists")
}

/// Path every notes link resolves against
pub fn notes_base(username: &str) -> String {
    format!("/users/{username}/notes")
}

/// Submitted values and validation errors of the note editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteEditorState {
    pub title: String,
    pub content: String,
    pub errors: NoteDraftErrors,
}

/// What the notes route renders next to the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesOutlet {
    Empty,
    Note(Note),
    Editor(NoteEditorState),
}

#[component]
fn NoteEditor(state: NoteEditorState) -> Element {
    let NoteEditorState {
        title,
        content,
        errors,
    } = state;

    rsx! {
        form { method: "POST", class: "note-editor",
            TextField {
                label: "Title",
                id: "note-title",
                name: "title",
                value: title,
                errors: errors.title,
            }
            TextArea {
                label: "Content",
                id: "note-content",
                name: "content",
                value: content,
                errors: errors.content,
            }
            FloatingToolbar {
                Button { variant: ButtonVariant::Destructive, r#type: "reset", "Reset" }
                Button { r#type: "submit", "Submit" }
            }
        }
    }
}

#[component]
fn NoteOutlet(outlet: NotesOutlet) -> Element {
    match outlet {
        NotesOutlet::Empty => rsx! {
            MainContent {
                p { class: "empty-state", "Select a note" }
            }
        },
        NotesOutlet::Note(note) => rsx! {
            MainTitle { "{note.title}" }
            MainContent {
                p { class: "note-content", "{note.content}" }
            }
        },
        NotesOutlet::Editor(state) => rsx! {
            MainTitle { "New Note" }
            MainContent {
                NoteEditor { state }
            }
        },
    }
}

#[derive(Props, Clone, PartialEq)]
struct NotesPageProps {
    context: RequestContext,
    owner: OwnerNotes,
    outlet: NotesOutlet,
}

#[allow(non_snake_case)]
fn NotesPage(props: NotesPageProps) -> Element {
    let NotesPageProps {
        context,
        owner,
        outlet,
    } = props;
    let is_owner = owner.is_owned_by(context.user.as_ref().map(|user| &user.id));
    let display_name = owner.display_name().to_string();
    let username = owner.username.clone();
    let title = format!("{display_name}'s Notes | Scribble");
    let items: Vec<(String, String)> = owner
        .notes
        .iter()
        .map(|note| (note.id.to_string(), note.title.clone()))
        .collect();

    rsx! {
        PageShell { context, title,
            RouteScope { base: notes_base(&username),
                Sidebar {
                    h1 { class: "sidebar-title",
                        Link { to: "/users/{username}", "{display_name}'s Notes" }
                    }
                    ul { class: "sidebar-list",
                        if is_owner {
                            SidebarNavItem { to: "new",
                                Icon { name: IconName::Plus, "New Note" }
                            }
                        }
                        for (id, note_title) in items {
                            SidebarNavItem { key: "{id}", to: id.clone(), "{note_title}" }
                        }
                    }
                }
                Main {
                    NoteOutlet { outlet }
                }
            }
        }
    }
}

/// Render the notes listing for `owner` with `outlet` in the main region.
pub fn render_notes_page(context: RequestContext, owner: OwnerNotes, outlet: NotesOutlet) -> String {
    render_document_string(
        context.theme,
        NotesPage,
        NotesPageProps {
            context,
            owner,
            outlet,
        },
    )
}

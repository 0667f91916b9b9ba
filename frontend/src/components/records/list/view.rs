//! Rendering for the list view: heading with count, the table (or the
//! loading/error placeholder), and the form overlay when one is open.

use common::views::list::{ListPhase, Overlay};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RecordList;
use crate::components::records::form::RecordForm;
use crate::components::records::RecordView;
use crate::helpers::format_count;

pub fn view<R: RecordView>(component: &RecordList<R>, ctx: &Context<RecordList<R>>) -> Html {
    let link = ctx.link();
    let resource = R::RESOURCE;

    let body = match component.list.phase() {
        ListPhase::Loading => html! {
            <div class="loading">{ format!("Loading {}...", resource.collection_field()) }</div>
        },
        ListPhase::Failed(message) => html! {
            <div class="error">{ format!("Error: {}", message) }</div>
        },
        ListPhase::Loaded(rows) => build_table(component, rows, link),
    };

    html! {
        <div class={format!("{}-list", resource.singular())}>
            <div class="list-header">
                <h2>{ format!("{} ({})", resource.label(), format_count(component.list.rows().len())) }</h2>
                <button class="btn-add" onclick={link.callback(|_| Msg::OpenCreate)}>
                    { format!("Add {}", resource.title()) }
                </button>
            </div>
            { body }
            { build_overlay(component, ctx) }
        </div>
    }
}

fn build_table<R: RecordView>(
    component: &RecordList<R>,
    rows: &[R],
    link: &Scope<RecordList<R>>,
) -> Html {
    html! {
        <table>
            <thead>
                <tr>
                    { for R::columns().iter().map(|column| html! { <th>{ *column }</th> }) }
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for rows.iter().map(|row| {
                    let id = row.id();
                    html! {
                        <tr key={id.to_string()}>
                            { row.cells() }
                            <td class="row-actions">
                                <button class="btn-edit" onclick={link.callback(move |_| Msg::OpenEdit(id))}>
                                    { "Edit" }
                                </button>
                                <button
                                    class="btn-delete"
                                    disabled={component.list.is_deleting(id)}
                                    onclick={link.callback(move |_| Msg::Delete(id))}
                                >
                                    { "Delete" }
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

fn build_overlay<R: RecordView>(component: &RecordList<R>, ctx: &Context<RecordList<R>>) -> Html {
    let link = ctx.link();
    let editing = match component.list.overlay() {
        Overlay::Hidden => return html! {},
        Overlay::Create => None,
        Overlay::Edit(record) => Some(record.clone()),
    };

    html! {
        <RecordForm<R>
            config={ctx.props().config.clone()}
            {editing}
            on_success={link.callback(|_| Msg::FormSucceeded)}
            on_cancel={link.callback(|_| Msg::FormCancelled)}
        />
    }
}

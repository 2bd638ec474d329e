use yew::prelude::*;
use shared::{TeamMemberRow, TeamRole};

#[derive(Properties, PartialEq)]
pub struct TeamPanelProps {
    pub members: Vec<TeamMemberRow>,
    pub loading: bool,
}

#[function_component(TeamPanel)]
pub fn team_panel(props: &TeamPanelProps) -> Html {
    html! {
        <section class="team-section">
            <h2>{"Zespół budżetu"}</h2>

            {if props.loading && props.members.is_empty() {
                html! { <div class="loading">{"Ładowanie zespołu..."}</div> }
            } else if props.members.is_empty() {
                html! { <p class="empty">{"Ten budżet nie ma jeszcze członków."}</p> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="team-table">
                            <thead>
                                <tr>
                                    <th>{"Użytkownik"}</th>
                                    <th>{"E-mail"}</th>
                                    <th>{"Rola"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.members.iter().map(|member| {
                                    let role_class = match member.role {
                                        TeamRole::Owner => "role owner",
                                        TeamRole::Member => "role member",
                                    };
                                    html! {
                                        <tr key={member.id}>
                                            <td>{&member.username}</td>
                                            <td>{&member.email}</td>
                                            <td class={role_class}>{member.role.label()}</td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}

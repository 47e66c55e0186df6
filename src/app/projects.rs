use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use super::homepage::FullScreenSection;
#[cfg(feature = "ssr")]
use crate::projects::get_projects;
use crate::projects::{ProjectMeta, ALL_PROJECTS, GLOBAL_PROJECT_CACHE};

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<ProjectMeta>, ServerFnError> {
    get_projects().await.map_err(|e| {
        tracing::error!(error = %e, "couldn't load projects");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = Resource::new(
        || (),
        move |_| async move {
            let cache = &*GLOBAL_PROJECT_CACHE;
            if let Some(p) = cache.get(ALL_PROJECTS) {
                return Ok(p.value().clone());
            }
            let projects = get_projects_server().await?;
            // the server memoizes on its own
            #[cfg(feature = "hydrate")]
            cache.insert(ALL_PROJECTS.to_string(), projects.clone());
            Ok::<_, ServerFnError>(projects)
        },
    );

    view! {
        <FullScreenSection background="bg-[#14532d]" class="p-8 gap-8 items-start">
            <h1 id="projects-section" class="text-3xl font-bold mt-24">
                "Featured Projects"
            </h1>
            <Transition fallback=move || {
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8 w-full">
                        <div class="loading-skeleton h-80 rounded-lg"></div>
                        <div class="loading-skeleton h-80 rounded-lg"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    match projects.await {
                        Ok(list) => {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 w-full">
                                    {list
                                        .into_iter()
                                        .map(|p| {
                                            view! {
                                                <Card
                                                    title=p.title
                                                    description=p.description
                                                    image_src=p.image
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! { <p class="text-muted">"Projects are unavailable right now."</p> }
                                .into_any()
                        }
                    }
                })}
            </Transition>
        </FullScreenSection>
    }
}

#[component]
pub fn Card(title: String, description: String, image_src: String) -> impl IntoView {
    let alt = title.clone();
    view! {
        <div class="rounded-lg p-1 max-w-sm w-full bg-white">
            <img src=image_src alt=alt class="rounded-lg object-cover w-full" />
            <div class="mt-6 space-y-3">
                <h3 class="p-2 text-black text-lg font-bold">{title}</h3>
                <p class="p-2 text-[#6c6c6c]">{description}</p>
            </div>
            <div class="flex gap-6">
                <p class="p-2 text-black">"See more " <i class="extra-arrow-right" /></p>
            </div>
        </div>
    }
}

use futurex_core::docs::{self, Block, Inline, Spans, TocItem};
use leptos::prelude::*;

/// Rendered Markdown page with a sticky table of contents.
#[component]
pub fn MarkdownArticle(source: &'static str) -> impl IntoView {
    let toc = docs::parse_toc(source);
    let blocks = docs::parse_blocks(source);
    let shell_class = if toc.is_empty() { "article-shell" } else { "article-shell has-toc" };

    view! {
        <div class=shell_class>
            {(!toc.is_empty()).then(|| view! { <TableOfContents items=toc /> })}
            <article class="markdown-body">
                {blocks.into_iter().map(render_block).collect::<Vec<_>>()}
            </article>
        </div>
    }
}

#[component]
fn TableOfContents(items: Vec<TocItem>) -> impl IntoView {
    view! {
        <nav class="toc" aria-label="Table of contents">
            <h3 class="toc-title">"Contents"</h3>
            <ul class="toc-list">
                {items.into_iter().map(|item| view! {
                    <li class=format!("d{}", item.depth)>
                        <a href=format!("#{}", item.id)>{item.text}</a>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}

fn render_block(block: Block) -> AnyView {
    match block {
        Block::Heading { depth, id, text } => match depth {
            1 => view! { <h1 id=id>{text}</h1> }.into_any(),
            2 => view! { <h2 id=id>{text}</h2> }.into_any(),
            3 => view! { <h3 id=id>{text}</h3> }.into_any(),
            4 => view! { <h4 id=id>{text}</h4> }.into_any(),
            5 => view! { <h5 id=id>{text}</h5> }.into_any(),
            _ => view! { <h6 id=id>{text}</h6> }.into_any(),
        },
        Block::Paragraph(spans) => view! { <p>{render_spans(spans)}</p> }.into_any(),
        Block::ListItem(spans) => view! { <ul><li>{render_spans(spans)}</li></ul> }.into_any(),
        Block::Image { alt, src } => view! {
            <img class="doc-image" src=src alt=alt loading="lazy" />
        }.into_any(),
        Block::Table { header, rows } => view! {
            <table class="doc-table">
                <thead>
                    <tr>
                        {header.into_iter().map(|h| view! { <th>{render_spans(h)}</th> }).collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            {row.into_iter().map(|cell| {
                                let align = if docs::is_numeric_text(&docs::plain_text(&cell)) { "right" } else { "left" };
                                view! { <td style=format!("text-align: {}", align)>{render_spans(cell)}</td> }
                            }).collect::<Vec<_>>()}
                        </tr>
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }.into_any(),
    }
}

fn render_spans(spans: Spans) -> Vec<AnyView> {
    spans
        .into_iter()
        .map(|span| match span {
            Inline::Text(t) => t.into_any(),
            Inline::Strong(t) => view! { <strong>{t}</strong> }.into_any(),
            Inline::Emphasis(t) => view! { <em>{t}</em> }.into_any(),
            Inline::Code(t) => view! { <code>{t}</code> }.into_any(),
            Inline::Link { text, href } => {
                let external = href.starts_with("http");
                view! {
                    <a
                        href=href
                        target=external.then_some("_blank")
                        rel=external.then_some("noopener noreferrer")
                    >
                        {text}
                    </a>
                }
                .into_any()
            }
        })
        .collect()
}

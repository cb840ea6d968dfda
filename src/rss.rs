use chrono::{NaiveTime, TimeZone, Utc};
use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::content::{capitalize, BlogPost, ContentError};

const SITE: &str = "https://flexyledger.xyz";

/// Blog feed, newest post first.
pub fn build_channel(posts: &[BlogPost]) -> Result<Channel, ContentError> {
    let mut dated = posts
        .iter()
        .map(|p| Ok((p.published()?, p)))
        .collect::<Result<Vec<_>, ContentError>>()?;
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let items = dated
        .into_iter()
        .map(|(date, p)| {
            let link = format!("{SITE}/#blog-{}", p.id);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            let pub_date = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
            ItemBuilder::default()
                .title(p.title.to_string())
                .description(p.excerpt.to_string())
                .categories(vec![CategoryBuilder::default()
                    .name(capitalize(p.category))
                    .build()])
                .pub_date(pub_date.to_rfc2822())
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{SITE}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    Ok(ChannelBuilder::default()
        .title("Insights & Articles")
        .description("Exploring the frontiers of technology through research, tutorials, and thought leadership")
        .link(SITE)
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::POSTS;

    #[test]
    fn test_feed_orders_newest_first() {
        let mut posts = POSTS.to_vec();
        posts.reverse();

        let channel = build_channel(&posts).expect("feed should build");

        let titles = channel
            .items()
            .iter()
            .filter_map(|i| i.title())
            .collect::<Vec<_>>();
        assert_eq!(titles.len(), POSTS.len());
        assert_eq!(titles[0], POSTS[0].title);
        assert_eq!(channel.items()[0].pub_date(), Some("Sat, 10 Jan 2026 00:00:00 +0000"));
    }

    #[test]
    fn test_bad_date_fails_feed() {
        let mut post = POSTS[0].clone();
        post.date = "10/01/2026";

        assert_eq!(
            build_channel(&[post]).err(),
            Some(ContentError::BadDate("10/01/2026"))
        );
    }
}

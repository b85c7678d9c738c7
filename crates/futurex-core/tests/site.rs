use futurex_core::docs::{parse_blocks, parse_toc};
use futurex_core::fixtures::{FINANCE_MD, OVERVIEW_MD};
use futurex_core::{Block, Level, MemoryFlags, Notice, Site, SiteTab};

#[test]
fn bundled_site_loads() {
    let site = Site::bundled().unwrap();
    assert!(site.config.validate().is_ok());
    assert!(!site.dataset.overall.is_empty());
    for level in Level::all() {
        assert!(!site.questions.for_level(*level).is_empty(), "{level} has no questions");
    }
}

#[test]
fn toc_covers_depth_two_to_four() {
    let toc = parse_toc("# Title\n## 1. Intro\n### **Bold** part\n#### Deep\n##### Too deep\nplain");
    let depths: Vec<u8> = toc.iter().map(|t| t.depth).collect();
    assert_eq!(depths, vec![2, 3, 4]);
    assert_eq!(toc[0].id, "1-intro");
    assert_eq!(toc[1].text, "Bold part");
    assert_eq!(toc[1].id, "bold-part");
}

#[test]
fn bundled_pages_have_toc_and_tables() {
    for page in [OVERVIEW_MD, FINANCE_MD] {
        let toc = parse_toc(page);
        assert!(!toc.is_empty());

        let blocks = parse_blocks(page);
        let heading_ids: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { depth, id, .. } if (2..=4).contains(depth) => Some(id.as_str()),
                _ => None,
            })
            .collect();
        let toc_ids: Vec<&str> = toc.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(heading_ids, toc_ids);
        assert!(blocks.iter().any(|b| matches!(b, Block::Table { .. })));
    }
}

#[test]
fn notice_flag_persists() {
    let site = Site::bundled().unwrap();
    let notice = Notice::new(site.config.notice.clone(), MemoryFlags::default());
    assert!(notice.should_show());
    notice.dismiss();
    assert!(!notice.should_show());
}

#[test]
fn tab_keys_cycle_both_ways() {
    let mut tab = SiteTab::Overview;
    let mut seen = Vec::new();
    for _ in 0..3 {
        tab = tab.on_key("ArrowRight").unwrap();
        seen.push(tab);
    }
    assert_eq!(seen, vec![SiteTab::Leaderboard, SiteTab::Sp500, SiteTab::Overview]);
    assert_eq!(tab.on_key("ArrowLeft"), Some(SiteTab::Sp500));
}

//! AccessiShop Demo - Main Entry Point
//!
//! Builds the demo storefront document, binds the accessibility layer,
//! and replays a scripted session: keyboard menu navigation, a hover
//! mega-menu, the newsletter modal's focus trap, search, and
//! add-to-cart. Screen-reader announcements are printed as they drain.

use anyhow::{Context, Result};
use axs_dom::{Document, NodeId};
use axs_widgets::{InputEvent, Key, Modifiers, Page};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("Starting AccessiShop demo");

    let doc = build_homepage();
    let mut page = Page::bind(doc);

    // Skip link straight to the content
    let skip = page.skip_links()[0].link();
    page.dispatch(InputEvent::Click { target: skip });

    // Open the account dropdown from the keyboard and walk it
    let account = page.dropdowns()[0].nav().trigger();
    page.dispatch(InputEvent::key_down(account, Key::ArrowDown));
    let items = page.dropdowns()[0].nav().targets().to_vec();
    page.dispatch(InputEvent::key_down(items[0], Key::ArrowDown));
    page.dispatch(InputEvent::key_down(items[1], Key::Escape));

    // Hover the shop mega-menu, drift away, come back inside the dwell
    let shop = page.mega_menus()[0].nav().trigger();
    page.dispatch(InputEvent::PointerEnter { target: shop });
    page.dispatch(InputEvent::PointerLeave { target: shop });
    page.advance(50);
    page.dispatch(InputEvent::PointerEnter { target: shop });
    page.dispatch(InputEvent::PointerLeave { target: shop });
    page.advance(100);

    // Search with a typing pause before submitting
    let input = page.searches()[0].input();
    page.doc_mut().set_attribute(input, "value", "headphones");
    page.dispatch(InputEvent::Input { target: input });
    page.advance(1000);
    let form = page.searches()[0].form();
    page.dispatch(InputEvent::Submit { target: form });

    // Add the first product to the cart and let the feedback settle
    let add = page
        .doc()
        .first_with_class(page.cards()[0].card(), "btn-primary")
        .context("demo card has no add button")?;
    page.dispatch(InputEvent::Click { target: add });
    page.advance(2000);

    // Newsletter modal: open, tab around the trap, close with Escape
    let opener = page
        .doc()
        .elements_with_attribute(NodeId::ROOT, "data-modal-trigger")[0];
    page.doc_mut().focus(opener);
    page.dispatch(InputEvent::Click { target: opener });
    page.advance(100);
    // Shift+Tab from the first control wraps to the last, Tab wraps
    // back, Escape closes and hands focus back to the opener.
    let focused = page.doc().active_element().context("modal holds focus")?;
    page.dispatch(InputEvent::KeyDown {
        target: focused,
        key: Key::Tab,
        modifiers: Modifiers::shift(),
    });
    let focused = page.doc().active_element().context("trap holds focus")?;
    page.dispatch(InputEvent::key_down(focused, Key::Tab));
    let focused = page.doc().active_element().context("trap holds focus")?;
    page.dispatch(InputEvent::key_down(focused, Key::Escape));

    println!("Screen reader transcript:");
    for announcement in page.take_announcements() {
        println!("  [{:?}] {}", announcement.politeness, announcement.text);
    }

    tracing::info!("Demo session complete");
    Ok(())
}

/// The demo storefront: header with skip link and cart, nav with a
/// hover mega-menu and an account dropdown, search form, product grid,
/// and a newsletter modal.
fn build_homepage() -> Document {
    let mut doc = Document::new();

    let header = doc.append_element(NodeId::ROOT, "header");
    let skip = doc.append_element(header, "a");
    doc.add_class(skip, "skip-link");
    doc.set_attribute(skip, "href", "#main-content");
    doc.append_text(skip, "Skip to main content");
    let cart = doc.append_element(header, "button");
    doc.set_attribute(cart, "aria-label", "Shopping cart (0 items)");
    let badge = doc.append_element(cart, "span");
    doc.add_class(badge, "cart-badge");
    doc.append_text(badge, "0");

    let nav = doc.append_element(NodeId::ROOT, "nav");
    let shop = doc.append_element(nav, "button");
    doc.set_attribute(shop, "data-megamenu", "");
    doc.set_attribute(shop, "aria-controls", "shop-menu");
    doc.set_attribute(shop, "aria-expanded", "false");
    doc.append_text(shop, "Shop");
    let shop_panel = doc.append_element(nav, "div");
    doc.set_attribute(shop_panel, "id", "shop-menu");
    for label in ["Electronics", "Clothing", "Home & Garden"] {
        let item = doc.append_element(shop_panel, "a");
        doc.set_attribute(item, "role", "menuitem");
        doc.set_attribute(item, "href", "#");
        doc.append_text(item, label);
    }

    let account = doc.append_element(nav, "button");
    doc.set_attribute(account, "data-dropdown", "");
    doc.set_attribute(account, "aria-controls", "account-menu");
    doc.set_attribute(account, "aria-expanded", "false");
    doc.append_text(account, "Account");
    let menu = doc.append_element(nav, "ul");
    doc.set_attribute(menu, "id", "account-menu");
    doc.set_attribute(menu, "role", "menu");
    for label in ["Sign in", "Orders", "Settings"] {
        let item = doc.append_element(menu, "a");
        doc.set_attribute(item, "role", "menuitem");
        doc.set_attribute(item, "tabindex", "-1");
        doc.set_attribute(item, "href", "#");
        doc.append_text(item, label);
    }

    let form = doc.append_element(NodeId::ROOT, "form");
    doc.set_attribute(form, "role", "search");
    let input = doc.append_element(form, "input");
    doc.set_attribute(input, "type", "search");
    doc.set_attribute(input, "id", "search");
    let submit = doc.append_element(form, "button");
    doc.set_attribute(submit, "type", "submit");
    doc.append_text(submit, "Search");

    let main = doc.append_element(NodeId::ROOT, "main");
    doc.set_attribute(main, "id", "main-content");
    for (name, href) in [
        ("Wireless Headphones", "/p/wireless-headphones"),
        ("Smart Watch", "/p/smart-watch"),
    ] {
        let card = doc.append_element(main, "article");
        doc.add_class(card, "product-card");
        doc.set_attribute(card, "tabindex", "0");
        let link = doc.append_element(card, "a");
        doc.add_class(link, "product-link");
        doc.set_attribute(link, "href", href);
        doc.append_text(link, name);
        let button = doc.append_element(card, "button");
        doc.add_class(button, "btn-primary");
        doc.append_text(button, "Add to Cart");
    }

    let opener = doc.append_element(NodeId::ROOT, "button");
    doc.set_attribute(opener, "data-modal-trigger", "newsletter");
    doc.append_text(opener, "Subscribe to newsletter");
    let modal = doc.append_element(NodeId::ROOT, "div");
    doc.add_class(modal, "modal");
    doc.set_attribute(modal, "id", "newsletter");
    doc.set_attribute(modal, "role", "dialog");
    doc.set_attribute(modal, "aria-labelledby", "newsletter-title");
    let backdrop = doc.append_element(modal, "div");
    doc.set_attribute(backdrop, "data-modal-backdrop", "newsletter");
    let title = doc.append_element(modal, "h2");
    doc.set_attribute(title, "id", "newsletter-title");
    doc.append_text(title, "Join our newsletter");
    let email = doc.append_element(modal, "input");
    doc.set_attribute(email, "type", "email");
    let subscribe = doc.append_element(modal, "button");
    doc.append_text(subscribe, "Subscribe");
    let close = doc.append_element(modal, "button");
    doc.set_attribute(close, "data-modal-close", "newsletter");
    doc.append_text(close, "Close");

    doc
}

use crate::animator::Target;
use crate::constants::*;
use crate::core::motion::{is_desktop, magnet_offset, orb_parallax, tilt_degrees};
use crate::core::Tween;
use crate::page::SharedPage;
use crate::{dom, frame};
use glam::Vec2;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn rect_center(rect: &web::DomRect) -> Vec2 {
    Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    )
}

/// Glow that trails the pointer.
pub fn wire_mouse_glow(document: &web::Document) {
    let (Some(window), Some(glow)) = (web::window(), document.get_element_by_id(MOUSE_GLOW_ID))
    else {
        return;
    };
    let mut follow = frame::per_frame(move |p: Vec2| {
        dom::set_style(&glow, "left", &format!("{}px", p.x));
        dom::set_style(&glow, "top", &format!("{}px", p.y));
    });
    dom::listen_passive(&window, "mousemove", move |ev: web::MouseEvent| {
        follow(client_pos(&ev))
    });
}

/// Spotlight, magnetic buttons and gallery tilt. Desktop only.
pub fn wire_desktop_effects(page: &SharedPage) {
    let (viewport_width, _) = dom::viewport_size();
    if !is_desktop(viewport_width) {
        log::debug!("[pointer] narrow viewport; desktop effects off");
        return;
    }
    wire_spotlight(page);
    wire_magnets(page);
    wire_gallery_tilt(page);
}

fn wire_spotlight(page: &SharedPage) {
    let (Some(window), Some(spot)) = (web::window(), dom::query(&page.document, SPOTLIGHT_SELECTOR))
    else {
        return;
    };
    let p = page.clone();
    let mut follow = frame::per_frame(move |pos: Vec2| {
        p.animator.to(
            Target::Element(&spot),
            &Tween::new()
                .xy(pos.x as f64, pos.y as f64)
                .auto_alpha(1.0)
                .duration(0.1),
        );
    });
    dom::listen_passive(&window, "mousemove", move |ev: web::MouseEvent| {
        follow(client_pos(&ev))
    });
}

fn wire_magnets(page: &SharedPage) {
    let magnets = dom::query_all(&page.document, HERO_PILL_SELECTOR);
    let Some(window) = web::window().filter(|_| !magnets.is_empty()) else {
        return;
    };
    let p = page.clone();
    let mut pull = frame::per_frame(move |pointer: Vec2| {
        for btn in &magnets {
            // Outside the radius the offset is zero, which eases the button home.
            let off = magnet_offset(pointer, rect_center(&btn.get_bounding_client_rect()));
            p.animator.to(
                Target::Element(btn),
                &Tween::new().xy(off.x as f64, off.y as f64).duration(0.3),
            );
        }
    });
    dom::listen_passive(&window, "mousemove", move |ev: web::MouseEvent| {
        pull(client_pos(&ev))
    });
}

fn wire_gallery_tilt(page: &SharedPage) {
    for item in dom::query_all(&page.document, GALLERY_ITEM_SELECTOR) {
        let p = page.clone();
        let el = item.clone();
        dom::listen(&item, "mousemove", move |ev: web::MouseEvent| {
            let rect = el.get_bounding_client_rect();
            let local = client_pos(&ev) - Vec2::new(rect.left() as f32, rect.top() as f32);
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            let (rx, ry) = tilt_degrees(local, size);
            p.animator.to(
                Target::Element(&el),
                &Tween {
                    rotate_x: Some(rx as f64),
                    rotate_y: Some(ry as f64),
                    transform_perspective: Some(1000.0),
                    ..Tween::new().duration(0.5)
                },
            );
        });
        let p = page.clone();
        let el = item.clone();
        dom::listen(&item, "mouseleave", move |_: web::MouseEvent| {
            p.animator.to(
                Target::Element(&el),
                &Tween {
                    rotate_x: Some(0.0),
                    rotate_y: Some(0.0),
                    ..Tween::new().duration(0.5)
                },
            );
        });
    }
}

/// Orbs drift with the pointer; attached once the hero has started.
pub fn wire_orb_parallax(page: &SharedPage) {
    let Some(window) = web::window() else {
        return;
    };
    // orb-2 mirrors orb-1, orb-3 moves half as far.
    const FACTORS: [f32; 3] = [1.0, -1.0, 0.5];
    let p = page.clone();
    let mut drift = frame::per_frame(move |pointer: Vec2| {
        let (vw, vh) = dom::viewport_size();
        let base = orb_parallax(pointer, Vec2::new(vw as f32, vh as f32));
        for (selector, factor) in ORB_SELECTORS.iter().zip(FACTORS) {
            let off = base * factor;
            p.animator.to(
                Target::Selector(selector),
                &Tween::new()
                    .xy(off.x as f64, off.y as f64)
                    .duration(2.0)
                    .ease("power2.out"),
            );
        }
    });
    dom::listen_passive(&window, "mousemove", move |ev: web::MouseEvent| {
        drift(client_pos(&ev))
    });
}

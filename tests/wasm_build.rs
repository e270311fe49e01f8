//! WASM browser tests
//!
//! Drives the exported `Staff` class against a small VexFlow stand-in that
//! draws plain DOM nodes, so the tests run without loading VexFlow itself.

#![cfg(target_arch = "wasm32")]

use staff_wasm::api::{get_accidental, parse_note_name, Staff};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const FAKE_FLOW: &str = r#"(function () {
    const NS = "http://www.w3.org/2000/svg";
    class Context {
        constructor(svg) { this.svg = svg; this.parent = svg; }
        openGroup() {
            const g = document.createElementNS(NS, "g");
            this.parent.appendChild(g);
            this.parent = g;
            return g;
        }
        closeGroup() { this.parent = this.parent.parentNode; }
        add(cls, attrs) {
            const g = document.createElementNS(NS, "g");
            g.setAttribute("class", cls);
            for (const k in attrs) g.setAttribute("data-" + k, attrs[k]);
            this.parent.appendChild(g);
        }
    }
    class Renderer {
        constructor(el, backend) {
            this.svg = document.createElementNS(NS, "svg");
            this.svg.setAttribute("data-backend", backend);
            el.appendChild(this.svg);
            this.ctx = new Context(this.svg);
        }
        resize(w, h) { this.svg.setAttribute("width", w); this.svg.setAttribute("height", h); }
        getContext() { return this.ctx; }
    }
    Renderer.Backends = { CANVAS: 1, SVG: 2 };
    class Stave {
        constructor(x, y, w) { this.x = x; this.y = y; this.w = w; }
        setContext(ctx) { this.ctx = ctx; return this; }
        addClef(clef) { this.clef = clef; return this; }
        draw() { this.ctx.add("stave", { x: this.x, width: this.w, clef: this.clef }); return this; }
    }
    class StaveNote {
        constructor(opts) { this.opts = opts; this.mods = []; }
        setStave(s) { this.stave = s; return this; }
        addModifier(m) { this.mods.push(m.type); return this; }
    }
    class Accidental { constructor(type) { this.type = type; } }
    const Formatter = {
        FormatAndDraw(ctx, stave, notes) {
            for (const n of notes) {
                ctx.add("note", { keys: n.opts.keys.join(","), duration: n.opts.duration, mods: n.mods.join(",") });
            }
        }
    };
    return { Renderer, Stave, StaveNote, Accidental, Formatter };
})()"#;

fn fake_flow() -> JsValue {
    js_sys::eval(FAKE_FLOW).expect("fake VexFlow should evaluate")
}

fn container() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    document.create_element("div").unwrap()
}

fn svg(parent: &web_sys::Element) -> web_sys::Element {
    parent.first_element_child().expect("renderer should add an svg")
}

#[wasm_bindgen_test]
fn test_staff_without_note() {
    let parent = container();
    let mut staff = Staff::new(fake_flow(), parent.clone(), 200, 120, None).unwrap();

    let svg = svg(&parent);
    assert_eq!(svg.get_attribute("width").as_deref(), Some("200"));
    assert_eq!(svg.get_attribute("height").as_deref(), Some("120"));
    assert_eq!(svg.child_element_count(), 1);

    let stave = svg.first_element_child().unwrap();
    assert_eq!(stave.get_attribute("data-width").as_deref(), Some("199"));
    assert_eq!(stave.get_attribute("data-clef").as_deref(), Some("treble"));

    assert!(!staff.has_note());
    staff.clear().unwrap();
    assert_eq!(svg.child_element_count(), 1);
}

#[wasm_bindgen_test]
fn test_staff_with_note_and_clear() {
    let parent = container();
    let mut staff = Staff::new(fake_flow(), parent.clone(), 200, 120, Some("C##/4".to_string())).unwrap();

    let svg = svg(&parent);
    assert!(staff.has_note());
    assert_eq!(svg.child_element_count(), 2);

    let group = svg.last_element_child().unwrap();
    let note = group.first_element_child().unwrap();
    assert_eq!(note.get_attribute("data-keys").as_deref(), Some("C##/4"));
    assert_eq!(note.get_attribute("data-duration").as_deref(), Some("w"));
    assert_eq!(note.get_attribute("data-mods").as_deref(), Some("##"));

    staff.clear().unwrap();
    assert!(!staff.has_note());
    assert_eq!(svg.child_element_count(), 1);

    staff.clear().unwrap();
    assert_eq!(svg.child_element_count(), 1);
}

#[wasm_bindgen_test]
fn test_malformed_note_is_an_error() {
    let parent = container();
    let result = Staff::new(fake_flow(), parent.clone(), 200, 120, Some("9/4".to_string()));

    let err = result.err().expect("construction should fail");
    assert!(err.as_string().unwrap().contains("9/4"));
    assert_eq!(parent.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_missing_namespace_is_an_error() {
    let result = Staff::new(JsValue::UNDEFINED, container(), 200, 120, None);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_get_accidental() {
    assert_eq!(get_accidental("C/4").unwrap(), None);
    assert_eq!(get_accidental("Eb/3").unwrap().as_deref(), Some("b"));
    assert!(get_accidental("H/4").is_err());
}

fn options(json: &str) -> JsValue {
    js_sys::JSON::parse(json).expect("options should be valid JSON")
}

fn field(value: &JsValue, name: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(name)).ok()?.as_string()
}

#[wasm_bindgen_test]
fn test_with_options_rejects_unknown_clef() {
    let parent = container();
    let result = Staff::with_options(
        fake_flow(),
        parent.clone(),
        200,
        120,
        Some("C/4".to_string()),
        options(r#"{"clef":"percussion"}"#),
    );

    let err = result.err().expect("unknown clef should fail");
    assert!(err.as_string().unwrap().contains("Invalid staff options"));
    assert_eq!(parent.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_with_options_undefined_uses_defaults() {
    let parent = container();
    let staff = Staff::with_options(
        fake_flow(),
        parent.clone(),
        200,
        120,
        Some("C/4".to_string()),
        JsValue::UNDEFINED,
    )
    .unwrap();

    let svg = svg(&parent);
    assert!(staff.has_note());
    assert_eq!(svg.get_attribute("data-backend").as_deref(), Some("2"));

    let stave = svg.first_element_child().unwrap();
    assert_eq!(stave.get_attribute("data-clef").as_deref(), Some("treble"));

    let note = svg.last_element_child().unwrap().first_element_child().unwrap();
    assert_eq!(note.get_attribute("data-duration").as_deref(), Some("w"));
}

#[wasm_bindgen_test]
fn test_with_options_canvas_and_note_is_an_error() {
    let parent = container();
    let result = Staff::with_options(
        fake_flow(),
        parent.clone(),
        200,
        120,
        Some("C/4".to_string()),
        options(r#"{"backend":"canvas"}"#),
    );

    assert!(result.is_err());
    assert_eq!(parent.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_empty_note_name_draws_stave_only() {
    let parent = container();
    let staff = Staff::new(fake_flow(), parent.clone(), 200, 120, Some(String::new())).unwrap();

    assert!(!staff.has_note());
    assert_eq!(svg(&parent).child_element_count(), 1);
}

#[wasm_bindgen_test]
fn test_parse_note_name() {
    let parsed = parse_note_name("Eb/3").unwrap();

    assert_eq!(field(&parsed, "letter").as_deref(), Some("E"));
    assert_eq!(field(&parsed, "accidental").as_deref(), Some("flat"));
    assert_eq!(field(&parsed, "key").as_deref(), Some("Eb/3"));
    assert!(parse_note_name("x/4").is_err());
}

#[wasm_bindgen_test]
fn test_start_hook_can_run_twice() {
    // The second call finds a logger already installed and only warns
    staff_wasm::main();
    staff_wasm::main();
}

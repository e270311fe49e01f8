//! VexFlow notation engine
//!
//! Drives the VexFlow library through a namespace object handed in by the
//! caller (usually `Vex.Flow`). Classes and static helpers are looked up on
//! that object with `Reflect`, so nothing is read from the global scope and
//! a test double with the same shape can be injected instead.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::errors::StaffError;
use crate::models::{Accidental, Backend, Clef};
use super::engine::{NotationEngine, NoteSpec, StaveLayout};

fn js_error(operation: &str, err: JsValue) -> StaffError {
    let message = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err));
    StaffError::engine(operation, message)
}

fn get(target: &JsValue, key: &str, operation: &str) -> Result<JsValue, StaffError> {
    let value = Reflect::get(target, &JsValue::from_str(key)).map_err(|e| js_error(operation, e))?;
    if value.is_undefined() {
        return Err(StaffError::engine(operation, format!("missing property '{}'", key)));
    }
    Ok(value)
}

fn call(target: &JsValue, method: &str, args: &Array) -> Result<JsValue, StaffError> {
    let function: Function = get(target, method, method)?
        .dyn_into()
        .map_err(|_| StaffError::engine(method, "not a function"))?;
    Reflect::apply(&function, target, args).map_err(|e| js_error(method, e))
}

/// VexFlow namespace handle
#[derive(Clone, Debug)]
pub struct VexFlow {
    flow: JsValue,
}

impl VexFlow {
    /// Wrap the VexFlow namespace object (e.g. `Vex.Flow`)
    pub fn new(flow: JsValue) -> Result<Self, StaffError> {
        if !flow.is_object() {
            return Err(StaffError::engine("VexFlow", "namespace must be an object"));
        }
        Ok(Self { flow })
    }

    fn class(&self, name: &str) -> Result<Function, StaffError> {
        get(&self.flow, name, name)?
            .dyn_into()
            .map_err(|_| StaffError::engine(name, "not a constructor"))
    }

    fn construct(&self, name: &str, args: &Array) -> Result<JsValue, StaffError> {
        let class = self.class(name)?;
        Reflect::construct(&class, args).map_err(|e| js_error(name, e))
    }
}

impl NotationEngine for VexFlow {
    type Container = web_sys::Element;
    type Renderer = JsValue;
    type Context = JsValue;
    type Stave = JsValue;
    type Note = JsValue;
    type Group = JsValue;

    fn create_renderer(&self, container: &web_sys::Element, backend: Backend) -> Result<JsValue, StaffError> {
        let renderer_class = self.class("Renderer")?;
        let backends = get(&renderer_class, "Backends", "Renderer")?;
        let backend_id = get(&backends, backend.key(), "Renderer")?;

        self.construct("Renderer", &Array::of2(container, &backend_id))
    }

    fn resize(&self, renderer: &mut JsValue, width: u32, height: u32) -> Result<(), StaffError> {
        call(renderer, "resize", &Array::of2(&width.into(), &height.into()))?;
        Ok(())
    }

    fn context(&self, renderer: &JsValue) -> Result<JsValue, StaffError> {
        call(renderer, "getContext", &Array::new())
    }

    fn draw_stave(&self, context: &mut JsValue, layout: StaveLayout, clef: Clef) -> Result<JsValue, StaffError> {
        let stave = self.construct(
            "Stave",
            &Array::of3(&layout.x.into(), &layout.y.into(), &layout.width.into()),
        )?;
        call(&stave, "setContext", &Array::of1(context))?;
        call(&stave, "addClef", &Array::of1(&clef.name().into()))?;
        call(&stave, "draw", &Array::new())?;
        Ok(stave)
    }

    fn create_note(&self, stave: &JsValue, spec: &NoteSpec) -> Result<JsValue, StaffError> {
        let keys: Array = spec.keys.iter().map(|k| JsValue::from_str(k)).collect();
        let options = Object::new();
        let set = |key: &str, value: &JsValue| {
            Reflect::set(&options, &JsValue::from_str(key), value).map_err(|e| js_error("StaveNote", e))
        };
        set("keys", keys.as_ref())?;
        set("duration", &spec.duration.code().into())?;
        set("align_center", &spec.align_center.into())?;

        let note = self.construct("StaveNote", &Array::of1(&options))?;
        call(&note, "setStave", &Array::of1(stave))?;
        Ok(note)
    }

    fn add_accidental(&self, note: &mut JsValue, accidental: Accidental) -> Result<(), StaffError> {
        let modifier = self.construct("Accidental", &Array::of1(&accidental.symbol().into()))?;
        call(note, "addModifier", &Array::of1(&modifier))?;
        Ok(())
    }

    fn open_group(&self, context: &mut JsValue) -> Result<JsValue, StaffError> {
        let group = call(context, "openGroup", &Array::new())?;
        if group.is_undefined() || group.is_null() {
            return Err(StaffError::engine("openGroup", "context returned no group"));
        }
        Ok(group)
    }

    fn close_group(&self, context: &mut JsValue) -> Result<(), StaffError> {
        call(context, "closeGroup", &Array::new())?;
        Ok(())
    }

    fn format_and_draw(&self, context: &mut JsValue, stave: &JsValue, notes: &[JsValue]) -> Result<(), StaffError> {
        let formatter = self.class("Formatter")?;
        let notes: Array = notes.iter().collect();
        call(&formatter, "FormatAndDraw", &Array::of3(context, stave, &notes))?;
        Ok(())
    }

    fn remove_group(&self, context: &mut JsValue, group: JsValue) -> Result<(), StaffError> {
        let svg: web_sys::Node = get(context, "svg", "removeChild")?
            .dyn_into()
            .map_err(|_| StaffError::engine("removeChild", "context has no SVG root"))?;
        let group: web_sys::Node = group
            .dyn_into()
            .map_err(|_| StaffError::engine("removeChild", "group is not a DOM node"))?;
        svg.remove_child(&group).map_err(|e| js_error("removeChild", e))?;
        Ok(())
    }
}

//! Unit functions exposed through the plugin registry

use gauge_plugin::prelude::*;
use crate::helpers::{extract_number, extract_text, require_args};
use crate::{base_unit_for, categories, convert, units_for};

// ============ convert ============

pub struct Convert;

static CONVERT_PARAMS: [Param; 4] = [
    Param::number("value", "Value to convert"),
    Param::text("from_unit", "Source unit (e.g., \"kilometer\")"),
    Param::text("to_unit", "Target unit (e.g., \"mile\")"),
    Param::text("category", "Category both units belong to (e.g., \"Length\")"),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(1, \"kilometer\", \"meter\", \"Length\") → 1000",
    "convert(100, \"celsius\", \"fahrenheit\", \"Temperature\") → 212",
    "convert(1024, \"kilobyte\", \"byte\", \"Digital Storage\") → 1048576",
];

static CONVERT_RELATED: [&str; 3] = ["units", "base_unit", "categories"];

impl FunctionPlugin for Convert {
    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: "convert",
            description: "Convert a value from one unit to another within a category",
            usage: "convert(value, from_unit, to_unit, category)",
            params: &CONVERT_PARAMS,
            returns: "Number",
            examples: &CONVERT_EXAMPLES,
            category: "units",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let parsed = require_args(args, "convert", 4).and_then(|_| {
            Ok((
                extract_number(&args[0], "convert", "value")?,
                extract_text(&args[1], "convert", "from_unit")?,
                extract_text(&args[2], "convert", "to_unit")?,
                extract_text(&args[3], "convert", "category")?,
            ))
        });
        let (value, from, to, category) = match parsed {
            Ok(p) => p,
            Err(e) => return Value::Error(e),
        };

        match convert(value, from, to, category) {
            Ok(n) => Value::Number(n),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ units ============

pub struct Units;

static UNITS_PARAMS: [Param; 1] = [
    Param::text("category", "Category name (e.g., \"Volume\")"),
];

static UNITS_EXAMPLES: [&str; 2] = [
    "units(\"Temperature\") → [celsius, fahrenheit, kelvin]",
    "units(\"Speed\") → [meter/second, kilometer/hour, mile/hour, knot]",
];

static UNITS_RELATED: [&str; 2] = ["categories", "base_unit"];

impl FunctionPlugin for Units {
    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: "units",
            description: "List the units available in a category",
            usage: "units(category)",
            params: &UNITS_PARAMS,
            returns: "List<Text>",
            examples: &UNITS_EXAMPLES,
            category: "units",
            related: &UNITS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let category = match require_args(args, "units", 1)
            .and_then(|_| extract_text(&args[0], "units", "category"))
        {
            Ok(c) => c,
            Err(e) => return Value::Error(e),
        };

        match units_for(category) {
            Ok(units) => Value::from(units),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ base_unit ============

pub struct BaseUnit;

static BASE_UNIT_PARAMS: [Param; 1] = [
    Param::text("category", "Category name (e.g., \"Mass\")"),
];

static BASE_UNIT_EXAMPLES: [&str; 2] = [
    "base_unit(\"Mass\") → gram",
    "base_unit(\"Temperature\") → none",
];

static BASE_UNIT_RELATED: [&str; 2] = ["units", "convert"];

impl FunctionPlugin for BaseUnit {
    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: "base_unit",
            description: "Base unit a linear category converts through; none for temperature",
            usage: "base_unit(category)",
            params: &BASE_UNIT_PARAMS,
            returns: "Text",
            examples: &BASE_UNIT_EXAMPLES,
            category: "units",
            related: &BASE_UNIT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let category = match require_args(args, "base_unit", 1)
            .and_then(|_| extract_text(&args[0], "base_unit", "category"))
        {
            Ok(c) => c,
            Err(e) => return Value::Error(e),
        };

        match base_unit_for(category) {
            Ok(Some(unit)) => Value::from(unit),
            Ok(None) => Value::from("none"),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ categories ============

pub struct Categories;

static CATEGORIES_EXAMPLES: [&str; 1] = [
    "categories() → [Length, Mass, Temperature, Volume, Digital Storage, Time, Speed]",
];

static CATEGORIES_RELATED: [&str; 1] = ["units"];

impl FunctionPlugin for Categories {
    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: "categories",
            description: "List the measurement categories in display order",
            usage: "categories()",
            params: &[],
            returns: "List<Text>",
            examples: &CATEGORIES_EXAMPLES,
            category: "units",
            related: &CATEGORIES_RELATED,
        }
    }

    fn call(&self, _args: &[Value], _ctx: &EvalContext) -> Value {
        Value::from(categories())
    }
}

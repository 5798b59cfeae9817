//! Shader program: two separately compiled stages plus a link step.
//!
//! wgpu only reports shader problems through its uncaptured-error handler, so
//! the stages are compiled with `naga` first. That turns a broken shader into a
//! `RenderError` carrying the compiler diagnostic instead of a device panic.

use std::collections::BTreeMap;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::error::{RenderError, ShaderStage};
use super::vertex::ATTRIBUTE_LOCATIONS;

pub(super) const VERTEX_SOURCE: &str = include_str!("shaders/mesh.vert.wgsl");
pub(super) const FRAGMENT_SOURCE: &str = include_str!("shaders/mesh.frag.wgsl");

pub(super) const VERTEX_ENTRY: &str = "vs_main";
pub(super) const FRAGMENT_ENTRY: &str = "fs_main";

/// A parsed and validated shader stage.
pub struct CompiledStage {
    stage: ShaderStage,
    source: &'static str,
    module: naga::Module,
}

impl CompiledStage {
    /// Parses and validates `source` as one WGSL stage.
    pub fn compile(stage: ShaderStage, source: &'static str) -> Result<Self, RenderError> {
        let module = naga::front::wgsl::parse_str(source).map_err(|e| RenderError::ShaderCompile {
            stage,
            log: e.emit_to_string(source),
        })?;

        Validator::new(ValidationFlags::all(), Capabilities::empty())
            .validate(&module)
            .map_err(|e| RenderError::ShaderCompile {
                stage,
                log: e.emit_to_string(source),
            })?;

        Ok(Self {
            stage,
            source,
            module,
        })
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    fn entry_point(&self, name: &str, stage: naga::ShaderStage) -> Option<&naga::EntryPoint> {
        self.module
            .entry_points
            .iter()
            .find(|ep| ep.name == name && ep.stage == stage)
    }
}

/// Linked vertex + fragment pair.
pub struct Program {
    vertex: CompiledStage,
    fragment: CompiledStage,
}

impl Program {
    /// Compiles and links the built-in mesh shaders.
    pub fn mesh() -> Result<Self, RenderError> {
        Self::build(VERTEX_SOURCE, FRAGMENT_SOURCE, &ATTRIBUTE_LOCATIONS)
    }

    /// Compiles both stages and links them.
    ///
    /// `attribute_locations` lists the vertex attributes the renderer feeds;
    /// the vertex stage may not read any other location.
    pub fn build(
        vertex_source: &'static str,
        fragment_source: &'static str,
        attribute_locations: &[u32],
    ) -> Result<Self, RenderError> {
        let vertex = CompiledStage::compile(ShaderStage::Vertex, vertex_source)?;
        let fragment = CompiledStage::compile(ShaderStage::Fragment, fragment_source)?;
        Self::link(vertex, fragment, attribute_locations)
    }

    /// Checks that the two stages fit together:
    /// - both entry points exist with the right stage
    /// - every vertex input location is one the renderer provides
    /// - every fragment input is written by the vertex stage with the same type
    pub fn link(
        vertex: CompiledStage,
        fragment: CompiledStage,
        attribute_locations: &[u32],
    ) -> Result<Self, RenderError> {
        let link_err = |log: String| RenderError::ProgramLink { log };

        let vs = vertex
            .entry_point(VERTEX_ENTRY, naga::ShaderStage::Vertex)
            .ok_or_else(|| link_err(format!("vertex entry point `{VERTEX_ENTRY}` not found")))?;
        let fs = fragment
            .entry_point(FRAGMENT_ENTRY, naga::ShaderStage::Fragment)
            .ok_or_else(|| {
                link_err(format!("fragment entry point `{FRAGMENT_ENTRY}` not found"))
            })?;

        let vs_inputs = argument_locations(&vertex.module, &vs.function);
        if let Some(loc) = vs_inputs.keys().find(|l| !attribute_locations.contains(l)) {
            return Err(link_err(format!(
                "vertex input @location({loc}) has no matching attribute (provided: {attribute_locations:?})"
            )));
        }

        let vs_outputs = match &vs.function.result {
            Some(result) => interface_locations(&vertex.module, result.binding.as_ref(), result.ty),
            None => BTreeMap::new(),
        };
        let fs_inputs = argument_locations(&fragment.module, &fs.function);

        for (loc, fs_ty) in &fs_inputs {
            match vs_outputs.get(loc) {
                None => {
                    return Err(link_err(format!(
                        "fragment input @location({loc}) is not written by the vertex stage"
                    )));
                }
                Some(vs_ty) if vs_ty != fs_ty => {
                    return Err(link_err(format!(
                        "@location({loc}) type mismatch: vertex writes {vs_ty:?}, fragment reads {fs_ty:?}"
                    )));
                }
                Some(_) => {}
            }
        }

        log::debug!(
            "mesh program linked: {} attribute(s), {} varying(s)",
            vs_inputs.len(),
            fs_inputs.len()
        );

        Ok(Self { vertex, fragment })
    }

    pub fn vertex(&self) -> &CompiledStage {
        &self.vertex
    }

    pub fn fragment(&self) -> &CompiledStage {
        &self.fragment
    }
}

fn argument_locations(
    module: &naga::Module,
    function: &naga::Function,
) -> BTreeMap<u32, naga::TypeInner> {
    let mut out = BTreeMap::new();
    for arg in &function.arguments {
        out.extend(interface_locations(module, arg.binding.as_ref(), arg.ty));
    }
    out
}

/// Collects `@location` bindings of an entry-point argument or result,
/// descending into struct members. Builtins are skipped.
fn interface_locations(
    module: &naga::Module,
    binding: Option<&naga::Binding>,
    ty: naga::Handle<naga::Type>,
) -> BTreeMap<u32, naga::TypeInner> {
    let inner = &module.types[ty].inner;
    match binding {
        Some(naga::Binding::Location { location, .. }) => {
            BTreeMap::from([(*location, inner.clone())])
        }
        Some(naga::Binding::BuiltIn(_)) => BTreeMap::new(),
        None => match inner {
            naga::TypeInner::Struct { members, .. } => members
                .iter()
                .flat_map(|m| interface_locations(module, m.binding.as_ref(), m.ty))
                .collect(),
            _ => BTreeMap::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSTHROUGH_FS: &str = "
        @fragment
        fn fs_main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
            return vec4<f32>(color, 1.0);
        }
    ";

    #[test]
    fn builtin_shaders_compile_and_link() {
        let program = Program::mesh().expect("built-in program must link");
        assert_eq!(program.vertex().stage(), ShaderStage::Vertex);
        assert_eq!(program.fragment().stage(), ShaderStage::Fragment);
    }

    #[test]
    fn syntax_error_reports_compile_failure_with_log() {
        let err = CompiledStage::compile(ShaderStage::Fragment, "@fragment fn fs_main( {")
            .err()
            .expect("broken source must not compile");
        match err {
            RenderError::ShaderCompile { stage, log } => {
                assert_eq!(stage, ShaderStage::Fragment);
                assert!(!log.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validation_error_is_a_compile_failure() {
        // Returns a vec3 where a vec4 is declared.
        let src = "
            @fragment
            fn fs_main() -> @location(0) vec4<f32> {
                return vec3<f32>(1.0, 0.0, 0.0);
            }
        ";
        assert!(matches!(
            CompiledStage::compile(ShaderStage::Fragment, src),
            Err(RenderError::ShaderCompile { stage: ShaderStage::Fragment, .. })
        ));
    }

    #[test]
    fn missing_varying_fails_to_link() {
        let vs = "
            @vertex
            fn vs_main(@location(0) p: vec3<f32>) -> @builtin(position) vec4<f32> {
                return vec4<f32>(p, 1.0);
            }
        ";
        let err = Program::build(vs, PASSTHROUGH_FS, &[0, 1]).err().expect("must not link");
        match err {
            RenderError::ProgramLink { log } => assert!(log.contains("location(0)")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn varying_type_mismatch_fails_to_link() {
        let vs = "
            struct Out {
                @builtin(position) clip: vec4<f32>,
                @location(0) color: vec4<f32>,
            };
            @vertex
            fn vs_main(@location(0) p: vec3<f32>) -> Out {
                var out: Out;
                out.clip = vec4<f32>(p, 1.0);
                out.color = vec4<f32>(1.0);
                return out;
            }
        ";
        assert!(matches!(
            Program::build(vs, PASSTHROUGH_FS, &[0, 1]),
            Err(RenderError::ProgramLink { .. })
        ));
    }

    #[test]
    fn unknown_attribute_fails_to_link() {
        let vs = "
            struct Out {
                @builtin(position) clip: vec4<f32>,
                @location(0) color: vec3<f32>,
            };
            @vertex
            fn vs_main(@location(0) p: vec3<f32>, @location(5) c: vec3<f32>) -> Out {
                var out: Out;
                out.clip = vec4<f32>(p, 1.0);
                out.color = c;
                return out;
            }
        ";
        assert!(matches!(
            Program::build(vs, PASSTHROUGH_FS, &[0, 1]),
            Err(RenderError::ProgramLink { .. })
        ));
    }

    #[test]
    fn wrong_entry_point_name_fails_to_link() {
        let fs = "
            @fragment
            fn main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
                return vec4<f32>(color, 1.0);
            }
        ";
        assert!(matches!(
            Program::build(VERTEX_SOURCE, fs, &[0, 1]),
            Err(RenderError::ProgramLink { .. })
        ));
    }
}

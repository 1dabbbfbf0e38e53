//! Factory.

use crate::buffer;
use crate::error::{Error, Result};
use crate::gl;
use crate::pixel;
use crate::shader;
use crate::texture;
use crate::vertex_array;
use std::{ffi, mem, path, ptr};

use crate::draw_call::{DrawCall, Kind};
use crate::framebuffer::{ClearColor, Framebuffer};
use crate::pipeline::{PolygonMode, State};
use crate::program::{self, Destroyed, Invocation, Uniform};
use crate::queue::Queue;
use crate::{Buffer, Program, Texture2, VertexArray};

/// OpenGL memory manager.
#[derive(Clone)]
pub struct Factory {
    /// Function pointers to the OpenGL backend.
    backend: gl::Backend,

    /// Destroyed buffers arrive here to be destroyed.
    buffer_queue: Queue<buffer::Id>,

    /// Destroyed textures arrive here to be destroyed.
    texture_queue: Queue<texture::Id>,

    /// Destroyed vertex arrays arrive here to be destroyed.
    vertex_array_queue: Queue<vertex_array::Id>,

    /// Destroyed shader objects and programs arrive here to be destroyed.
    program_queue: Queue<Destroyed>,
}

impl Factory {
    /// Constructor.
    pub fn new<F>(query_proc_address: F) -> Self
        where F: FnMut(&str) -> *const ()
    {
        Self {
            backend: gl::Backend::load(query_proc_address),
            buffer_queue: Queue::new(),
            texture_queue: Queue::new(),
            vertex_array_queue: Queue::new(),
            program_queue: Queue::new(),
        }
    }

    /// Deletes every GL object whose last handle has been dropped.
    pub fn cleanup(&self) {
        while let Some(id) = self.buffer_queue.next() {
            self.backend.delete_buffer(id);
        }
        while let Some(id) = self.vertex_array_queue.next() {
            self.backend.delete_vertex_array(id);
        }
        while let Some(id) = self.texture_queue.next() {
            self.backend.delete_texture(id);
        }
        while let Some(destroyed) = self.program_queue.next() {
            match destroyed {
                Destroyed::Object(id) => self.backend.delete_shader(id),
                Destroyed::Program(id) => self.backend.delete_program(id),
            }
        }
    }

    /// Clear the color buffer.
    pub fn clear(&self, color: ClearColor) {
        let ClearColor { r, g, b, a } = color;
        self.backend.clear_color(r, g, b, a);
        self.backend.clear(gl::COLOR_BUFFER_BIT);
    }

    /// Sets the viewport to cover the whole framebuffer.
    pub fn resize_viewport(&self, framebuffer: &Framebuffer) {
        let (w, h) = framebuffer.dimensions();
        self.backend.viewport(0, 0, w, h);
    }

    /// Create an uninitialized GPU buffer.
    pub fn buffer(&self, kind: buffer::Kind, usage: buffer::Usage) -> Buffer {
        let id = self.backend.gen_buffer();
        let size = 0;
        let tx = self.buffer_queue.tx();
        Buffer::new(id, kind, size, usage, tx)
    }

    /// Create a GPU buffer holding a copy of `data`.
    pub fn buffer_with_data<T>(
        &self,
        kind: buffer::Kind,
        usage: buffer::Usage,
        data: &[T],
    ) -> Buffer {
        let mut buffer = self.buffer(kind, usage);
        self.initialize_buffer(&mut buffer, data);
        buffer
    }

    /// (Re)-initialize the contents of a [`Buffer`].
    ///
    /// [`Buffer`]: buffer/struct.Buffer.html
    pub fn initialize_buffer<T>(&self, buffer: &mut Buffer, data: &[T]) {
        let size = data.len() * mem::size_of::<T>();
        let target = buffer.kind().as_gl_enum();
        self.backend.bind_buffer(buffer.id(), target);
        self.backend.buffer_data(
            target,
            size,
            data.as_ptr(),
            buffer.usage().as_gl_enum(),
        );
        self.backend.bind_buffer(0, target);
        buffer.set_size(size);
    }

    /// A collection of GPU buffers that may be drawn with a program.
    pub fn vertex_array(&self, builder: vertex_array::Builder) -> VertexArray {
        let id = self.backend.gen_vertex_array();
        let tx = self.vertex_array_queue.tx();

        // Setup the vertex array
        {
            self.backend.bind_vertex_array(id);
            if let Some(ref accessor) = builder.indices {
                self.backend.bind_buffer(accessor.buffer().id(), gl::ELEMENT_ARRAY_BUFFER);
            }
            for (location, accessor) in builder.attributes.iter() {
                self.backend.bind_buffer(accessor.buffer().id(), gl::ARRAY_BUFFER);
                self.backend.vertex_attrib_pointer(
                    location as u8,
                    accessor.format().size() as _,
                    accessor.format().gl_data_type(),
                    accessor.format().norm(),
                    accessor.stride() as _,
                    accessor.offset(),
                );
                self.backend.enable_vertex_attrib_array(location as _);
            }
            self.backend.bind_vertex_array(0);
            self.backend.bind_buffer(0, gl::ARRAY_BUFFER);
        }

        VertexArray::new(id, builder, tx)
    }

    /// Compile GLSL shader code into a shader object.
    pub fn shader(
        &self,
        kind: shader::Kind,
        source: &shader::Source,
    ) -> Result<shader::Object> {
        let id = self.backend.create_shader(kind.as_gl_enum());
        let object = shader::Object::new(id, kind, self.program_queue.tx());
        self.backend.shader_source(id, source.as_cstr());
        match self.backend.compile_shader(id) {
            gl::Status::Ok => Ok(object),
            gl::Status::Failed(log) => Err(Error::ShaderCompile {
                kind,
                path: source.origin().map(path::Path::to_path_buf),
                log,
            }),
        }
    }

    /// Link GLSL objects to create a GLSL program.
    pub fn program(
        &self,
        vertex: &shader::Object,
        fragment: &shader::Object,
    ) -> Result<Program> {
        let id = self.backend.create_program();
        let program = Program::new(id, self.program_queue.tx());
        self.backend.attach_shader(id, vertex.id());
        self.backend.attach_shader(id, fragment.id());
        match self.backend.link_program(id) {
            gl::Status::Ok => Ok(program),
            gl::Status::Failed(log) => Err(Error::ProgramLink { log }),
        }
    }

    /// Compile and link a program from in-memory GLSL.
    pub fn program_from_sources(
        &self,
        vertex: &str,
        fragment: &str,
    ) -> Result<Program> {
        let vertex = self.shader(shader::Kind::Vertex, &shader::Source::new(vertex)?)?;
        let fragment = self.shader(shader::Kind::Fragment, &shader::Source::new(fragment)?)?;
        self.program(&vertex, &fragment)
    }

    /// Read, compile and link a program from two GLSL files.
    ///
    /// The shader objects are released once linked.
    pub fn program_from_files<P, Q>(&self, vertex: P, fragment: Q) -> Result<Program>
        where P: AsRef<path::Path>, Q: AsRef<path::Path>
    {
        let vertex = shader::Source::from_file(vertex)?;
        let fragment = shader::Source::from_file(fragment)?;
        let vertex = self.shader(shader::Kind::Vertex, &vertex)?;
        let fragment = self.shader(shader::Kind::Fragment, &fragment)?;
        self.program(&vertex, &fragment)
    }

    /// Retrieves the location of a named uniform.
    pub fn query_uniform_location(
        &self,
        program: &Program,
        name: &str,
    ) -> Option<i32> {
        let cstr = match ffi::CString::new(name) {
            Ok(cstr) => cstr,
            Err(_) => {
                warn!("Uniform name {:?} contains a NUL byte", name);
                return None;
            }
        };
        program::active_location(self.backend.get_uniform_location(program.id(), &cstr))
    }

    fn apply_uniform(&self, program: &Program, name: &str, value: Uniform) {
        let location = match self.query_uniform_location(program, name) {
            Some(location) => location,
            None => {
                debug!("Uniform `{}` not active in {:?}", name, program);
                return;
            }
        };
        match value {
            Uniform::Bool(x) => self.backend.uniform_1i(location, x as i32),
            Uniform::Int(x) => self.backend.uniform_1i(location, x),
            Uniform::Float(x) => self.backend.uniform_1f(location, x),
            Uniform::Vec2([x, y]) => self.backend.uniform_2f(location, x, y),
            Uniform::Vec3([x, y, z]) => self.backend.uniform_3f(location, x, y, z),
            Uniform::Vec4([x, y, z, w]) => self.backend.uniform_4f(location, x, y, z, w),
        }
    }

    /// Create a 2D texture backed by uninitialized GPU memory.
    pub fn texture2(
        &self,
        width: u32,
        height: u32,
        mipmap: bool,
        format: texture::Format,
    ) -> Texture2 {
        let id = self.backend.gen_texture();
        let tx = self.texture_queue.tx();
        self.backend.bind_texture(gl::TEXTURE_2D, id);
        self.backend.tex_image_2d(
            gl::TEXTURE_2D,
            format.as_gl_enum(),
            width,
            height,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            ptr::null(),
        );
        if mipmap {
            self.backend.generate_mipmap(gl::TEXTURE_2D);
        }
        self.backend.bind_texture(gl::TEXTURE_2D, 0);
        Texture2::new(id, width, height, mipmap, format, tx)
    }

    /// Create a 2D texture holding a decoded image.
    pub fn texture2_from_image(&self, image: &texture::Image, mipmap: bool) -> Result<Texture2> {
        let texture = self.texture2(
            image.width(),
            image.height(),
            mipmap,
            texture::Format::from(image.layout()),
        );
        self.write_texture2(&texture, image.layout(), image.data())?;
        Ok(texture)
    }

    /// Read an image file into a new mipmapped 2D texture.
    pub fn texture2_from_file<P: AsRef<path::Path>>(&self, path: P) -> Result<Texture2> {
        let image = texture::Image::open(path)?;
        self.texture2_from_image(&image, true)
    }

    /// (Re)-initialize the contents of a [`Texture2`].
    ///
    /// Fails without touching the texture if `data` is shorter than a
    /// tightly packed image of the texture's dimensions.
    ///
    /// [`Texture2`]: texture/struct.Texture2.html
    pub fn write_texture2<T>(
        &self,
        texture: &Texture2,
        layout: pixel::U8,
        data: &[T],
    ) -> Result<()> {
        texture::check_data_len(
            texture.width(),
            texture.height(),
            layout,
            data.len() * mem::size_of::<T>(),
        )?;
        self.backend.bind_texture(gl::TEXTURE_2D, texture.id());
        let (type_, format) = layout.as_gl_enums();
        self.backend.pixel_store_i(
            gl::UNPACK_ALIGNMENT,
            layout.unpack_alignment(texture.width()),
        );
        self.backend.tex_image_2d(
            gl::TEXTURE_2D,
            texture.format().as_gl_enum(),
            texture.width(),
            texture.height(),
            format,
            type_,
            data.as_ptr() as *const _,
        );
        self.backend.pixel_store_i(gl::UNPACK_ALIGNMENT, 4);
        if texture.mipmap() {
            self.backend.generate_mipmap(gl::TEXTURE_2D);
        }
        self.backend.bind_texture(gl::TEXTURE_2D, 0);
        Ok(())
    }

    /// Perform a draw call.
    pub fn draw(
        &self,
        framebuffer: &Framebuffer,
        state: &State,
        vertex_array: &VertexArray,
        draw_call: &DrawCall,
        invocation: &Invocation,
    ) {
        self.resize_viewport(framebuffer);
        self.backend.bind_vertex_array(vertex_array.id());
        self.backend.use_program(invocation.program.id());
        for &(name, value) in invocation.uniforms.iter() {
            self.apply_uniform(invocation.program, name, value);
        }
        for (unit, &(name, sampler)) in invocation.samplers.iter().enumerate() {
            let (id, ty) = (sampler.id(), sampler.ty());
            self.backend.active_texture(unit as u32);
            self.backend.bind_texture(ty, id);
            self.backend.tex_parameteri(
                ty,
                gl::TEXTURE_MAG_FILTER,
                sampler.mag_filter.as_gl_enum(),
            );
            self.backend.tex_parameteri(
                ty,
                gl::TEXTURE_MIN_FILTER,
                sampler.min_filter.as_gl_enum(),
            );
            self.backend.tex_parameteri(
                ty,
                gl::TEXTURE_WRAP_S,
                sampler.wrap_s.as_gl_enum(),
            );
            self.backend.tex_parameteri(
                ty,
                gl::TEXTURE_WRAP_T,
                sampler.wrap_t.as_gl_enum(),
            );
            self.apply_uniform(invocation.program, name, Uniform::Int(unit as i32));
        }
        self.backend.polygon_mode(gl::FRONT_AND_BACK, state.polygon_mode.as_gl_enum());
        if let PolygonMode::Line(width) = state.polygon_mode {
            self.backend.line_width(width as f32);
        }
        match draw_call.kind {
            Kind::Arrays => {
                self.backend.draw_arrays(gl::TRIANGLES, draw_call.offset, draw_call.count);
            },
            Kind::Elements => {
                match vertex_array.indices() {
                    Some(accessor) => {
                        let format = accessor.format();
                        let offset = draw_call.index_byte_offset(accessor.offset(), format);
                        self.backend.draw_elements(gl::TRIANGLES, offset, draw_call.count, format.gl_data_type());
                    }
                    None => error!("Indexed draw of {:?} without an index buffer", vertex_array),
                }
            },
        }
        self.backend.use_program(0);
        self.backend.bind_vertex_array(0);
    }
}

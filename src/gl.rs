use std::{ffi, os, ptr, rc};

// Import OpenGL bindings.
include!(concat!(env!("OUT_DIR"), "/gl.rs"));

/// Outcome of a compile or link step, carrying the driver's info log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// The step succeeded.
    Ok,

    /// The step failed; contains the info log.
    Failed(String),
}

#[derive(Clone)]
pub struct Backend {
    gl: rc::Rc<Gl>,
}

impl Backend {
    /// Constructor.
    pub fn load<F>(mut func: F) -> Self
        where F: FnMut(&str) -> *const ()
    {
        let gl = rc::Rc::new(Gl::load_with(|sym| func(sym) as *const _));
        Backend { gl }
    }

    // Error checking

    /// Corresponds to `glGetError` plus an error check.
    pub fn check_error(&self) {
        let error = unsafe { self.gl.GetError() };
        if error != NO_ERROR {
            error!(target: "gl", "0x{:x}", error);
        }
    }

    // Pipeline state operations

    /// Corresponds to `glClear`.
    pub fn clear(&self, ops: u32) {
        trace!(target: "gl", "glClear{:?}", (ops,));
        unsafe {
            self.gl.Clear(ops);
        }
        self.check_error();
    }

    /// Corresponds to `glClearColor`.
    pub fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        trace!(target: "gl", "glClearColor{:?}", (r, g, b, a));
        unsafe {
            self.gl.ClearColor(r, g, b, a);
        }
        self.check_error();
    }

    /// Corresponds to `glPolygonMode`.
    pub fn polygon_mode(&self, face: u32, mode: u32) {
        trace!(target: "gl", "glPolygonMode{:?}", (face, mode));
        unsafe {
            self.gl.PolygonMode(face, mode);
        }
        self.check_error();
    }

    /// Corresponds to `glLineWidth`.
    pub fn line_width(&self, width: f32) {
        trace!(target: "gl", "glLineWidth{:?}", (width,));
        unsafe {
            self.gl.LineWidth(width);
        }
        self.check_error();
    }

    /// Corresponds to `glViewport`.
    pub fn viewport(&self, x: u32, y: u32, w: u32, h: u32) {
        trace!(target: "gl", "glViewport{:?}", (x, y, w, h));
        unsafe {
            self.gl.Viewport(x as _, y as _, w as _, h as _);
        }
        self.check_error();
    }

    // Buffer operations

    /// Corresponds to `glGenBuffers(1)`.
    pub fn gen_buffer(&self) -> u32 {
        let mut id: u32 = 0;
        unsafe {
            trace!(target: "gl", "glGenBuffers(1) ");
            self.gl.GenBuffers(1, &mut id as *mut _)
        };
        trace!(target: "gl", " => {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteBuffers(1)`.
    pub fn delete_buffer(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteBuffers{:?}", (1, id));
            self.gl.DeleteBuffers(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindBuffer`.
    pub fn bind_buffer(&self, id: u32, ty: u32) {
        unsafe {
            trace!(target: "gl", "glBindBuffer{:?}", (ty, id));
            self.gl.BindBuffer(ty, id);
        }
        self.check_error();
    }

    /// Corresponds to `glBufferData`.
    pub fn buffer_data<T>(&self, ty: u32, len: usize, ptr: *const T, usage: u32) {
        unsafe {
            trace!(target: "gl", "glBufferData{:?}", (ty, len, ptr, usage));
            self.gl.BufferData(ty, len as _, ptr as *const _, usage);
        }
        self.check_error();
    }

    // Vertex array operations

    /// Corresponds to `glGenVertexArrays(1)`.
    pub fn gen_vertex_array(&self) -> u32 {
        let mut id: u32 = 0;
        unsafe {
            trace!(target: "gl", "glGenVertexArrays(1) ");
            self.gl.GenVertexArrays(1, &mut id as *mut _);
            trace!(target: "gl", "=> {}", id);
        }
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteVertexArrays(1)`.
    pub fn delete_vertex_array(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteVertexArrays{:?}", (1, id));
            self.gl.DeleteVertexArrays(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindVertexArray`.
    pub fn bind_vertex_array(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindVertexArray{:?}", (id,));
            self.gl.BindVertexArray(id);
        }
        self.check_error();
    }

    /// Corresponds to `glVertexAttribPointer`.
    pub fn vertex_attrib_pointer(&self, id: u8, sz: i32, ty: u32, norm: bool, stride: i32, off: usize) {
        unsafe {
            trace!(target: "gl", "glVertexAttribPointer{:?}", (id, sz, ty, norm, stride, off));
            self.gl.VertexAttribPointer(id as _, sz as _, ty, if norm { TRUE } else { FALSE }, stride as _, off as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glEnableVertexAttribArray`.
    pub fn enable_vertex_attrib_array(&self, idx: u8) {
        unsafe {
            trace!(target: "gl", "glEnableVertexAttribArray{:?}", (idx,));
            self.gl.EnableVertexAttribArray(idx as _);
        }
        self.check_error();
    }

    // Program operations

    /// Corresponds to `glCreateShader`.
    pub fn create_shader(&self, ty: u32) -> u32 {
        let id = unsafe {
            trace!(target: "gl", "glCreateShader{:?} ", (ty,));
            self.gl.CreateShader(ty)
        };
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteShader`.
    pub fn delete_shader(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteShader{:?}", (id,));
            self.gl.DeleteShader(id);
        }
        self.check_error();
    }

    /// Corresponds to `glShaderSource`.
    pub fn shader_source(&self, id: u32, source: &ffi::CStr) {
        unsafe {
            trace!(target: "gl", "glShaderSource{:?}", (id, source));
            let ptr = source.as_ptr();
            self.gl.ShaderSource(id, 1, &ptr as *const _, ptr::null());
        }
        self.check_error();
    }

    /// Corresponds to `glCompileShader` followed by a `GL_COMPILE_STATUS`
    /// query and, on failure, `glGetShaderInfoLog`.
    pub fn compile_shader(&self, id: u32) -> Status {
        let mut status = 0i32;
        unsafe {
            trace!(target: "gl", "glCompileShader{:?}", (id,));
            self.gl.CompileShader(id);
            self.check_error();
            self.gl.GetShaderiv(id, COMPILE_STATUS, &mut status as *mut _);
            self.check_error();
        }
        if status == 0 {
            Status::Failed(self.shader_info_log(id))
        } else {
            Status::Ok
        }
    }

    /// Corresponds to `glGetShaderInfoLog`.
    pub fn shader_info_log(&self, id: u32) -> String {
        let mut len = 0i32;
        let mut written = 0i32;
        let mut log;
        unsafe {
            self.gl.GetShaderiv(id, INFO_LOG_LENGTH, &mut len as *mut _);
            log = vec![0u8; len.max(1) as usize];
            trace!(target: "gl", "glGetShaderInfoLog{:?}", (id, len));
            self.gl.GetShaderInfoLog(id, len, &mut written as *mut _, log.as_mut_ptr() as *mut _);
        }
        self.check_error();
        log.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&log).into_owned()
    }

    /// Corresponds to `glCreateProgram`.
    pub fn create_program(&self) -> u32 {
        let id = unsafe {
            trace!(target: "gl", "glCreateProgram() ");
            self.gl.CreateProgram()
        };
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteProgram`.
    pub fn delete_program(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteProgram{:?}", (id,));
            self.gl.DeleteProgram(id);
        }
        self.check_error();
    }

    /// Corresponds to `glAttachShader`.
    pub fn attach_shader(&self, program: u32, shader: u32) {
        unsafe {
            trace!(target: "gl", "glAttachShader{:?}", (program, shader));
            self.gl.AttachShader(program, shader);
        }
        self.check_error();
    }

    /// Corresponds to `glLinkProgram` followed by a `GL_LINK_STATUS` query
    /// and, on failure, `glGetProgramInfoLog`.
    pub fn link_program(&self, id: u32) -> Status {
        let mut status = 0i32;
        unsafe {
            trace!(target: "gl", "glLinkProgram{:?}", (id,));
            self.gl.LinkProgram(id);
            self.check_error();
            trace!(target: "gl", "glGetProgramiv{:?} ", (id, LINK_STATUS));
            self.gl.GetProgramiv(id, LINK_STATUS, &mut status as *mut _);
            trace!(target: "gl", "=> {}", status);
            self.check_error();
        }
        if status == 0 {
            Status::Failed(self.program_info_log(id))
        } else {
            Status::Ok
        }
    }

    /// Corresponds to `glGetProgramInfoLog`.
    pub fn program_info_log(&self, id: u32) -> String {
        let mut len = 0i32;
        let mut written = 0i32;
        let mut log;
        unsafe {
            self.gl.GetProgramiv(id, INFO_LOG_LENGTH, &mut len as *mut _);
            log = vec![0u8; len.max(1) as usize];
            trace!(target: "gl", "glGetProgramInfoLog{:?}", (id, len));
            self.gl.GetProgramInfoLog(id, len, &mut written as *mut _, log.as_mut_ptr() as *mut _);
        }
        self.check_error();
        log.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&log).into_owned()
    }

    /// Corresponds to `glGetUniformLocation`.
    pub fn get_uniform_location(
        &self,
        id: u32,
        name: &ffi::CStr,
    ) -> i32 {
        let index;
        unsafe {
            trace!(target: "gl", "glGetUniformLocation{:?} ", (id, name));
            index = self.gl.GetUniformLocation(id, name.as_ptr());
            trace!(target: "gl", "=> {}", index);
        }
        self.check_error();
        index
    }

    /// Corresponds to `glUniform1i`.
    pub fn uniform_1i(&self, location: i32, x: i32) {
        unsafe {
            trace!(target: "gl", "glUniform1i{:?}", (location, x));
            self.gl.Uniform1i(location, x);
        }
        self.check_error();
    }

    /// Corresponds to `glUniform1f`.
    pub fn uniform_1f(&self, location: i32, x: f32) {
        unsafe {
            trace!(target: "gl", "glUniform1f{:?}", (location, x));
            self.gl.Uniform1f(location, x);
        }
        self.check_error();
    }

    /// Corresponds to `glUniform2f`.
    pub fn uniform_2f(&self, location: i32, x: f32, y: f32) {
        unsafe {
            trace!(target: "gl", "glUniform2f{:?}", (location, x, y));
            self.gl.Uniform2f(location, x, y);
        }
        self.check_error();
    }

    /// Corresponds to `glUniform3f`.
    pub fn uniform_3f(&self, location: i32, x: f32, y: f32, z: f32) {
        unsafe {
            trace!(target: "gl", "glUniform3f{:?}", (location, x, y, z));
            self.gl.Uniform3f(location, x, y, z);
        }
        self.check_error();
    }

    /// Corresponds to `glUniform4f`.
    pub fn uniform_4f(&self, location: i32, x: f32, y: f32, z: f32, w: f32) {
        unsafe {
            trace!(target: "gl", "glUniform4f{:?}", (location, x, y, z, w));
            self.gl.Uniform4f(location, x, y, z, w);
        }
        self.check_error();
    }

    // Texture operations

    /// Corresponds to `glGenTextures(1)`.
    pub fn gen_texture(&self) -> u32 {
        let mut id = INVALID_INDEX;
        unsafe {
            trace!(target: "gl", "glGenTextures(1) ");
            self.gl.GenTextures(1, &mut id as *mut _);
            trace!(target: "gl", "=> {}", id);
        }
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteTextures(1)`.
    pub fn delete_texture(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteTextures{:?}", (1, id));
            self.gl.DeleteTextures(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindTexture`.
    pub fn bind_texture(&self, ty: u32, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindTexture{:?}", (ty, id));
            self.gl.BindTexture(ty, id);
        }
        self.check_error();
    }

    /// Corresponds to `glTexParameteri`.
    pub fn tex_parameteri(&self, ty: u32, param: u32, value: u32) {
        unsafe {
            trace!(target: "gl", "glTexParameteri{:?}", (ty, param, value));
            self.gl.TexParameteri(ty, param, value as i32);
        }
        self.check_error();
    }

    /// Corresponds to `glPixelStorei`.
    pub fn pixel_store_i(&self, param: u32, value: i32) {
        unsafe {
            trace!(target: "gl", "glPixelStorei{:?}", (param, value));
            self.gl.PixelStorei(param, value);
        }
        self.check_error();
    }

    /// Corresponds to `glTexImage2D`.
    pub fn tex_image_2d(
        &self,
        target: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        format: u32,
        ty: u32,
        data: *const os::raw::c_void,
    ) {
        unsafe {
            trace!(target: "gl",
                "glTexImage2D{:?}",
                (
                    target,
                    0,
                    internal_format,
                    width,
                    height,
                    0,
                    format,
                    ty,
                    data,
                ),
            );
            self.gl.TexImage2D(
                target,
                0,
                internal_format as _,
                width as _,
                height as _,
                0,
                format,
                ty,
                data,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glGenerateMipmap`.
    pub fn generate_mipmap(&self, target: u32) {
        unsafe {
            trace!(target: "gl", "glGenerateMipmap{:?}", (target,));
            self.gl.GenerateMipmap(target);
        }
        self.check_error();
    }

    /// Corresponds to `glActiveTexture(GL_TEXTURE0 + index)`.
    pub fn active_texture(&self, index: u32) {
        unsafe {
            trace!(target: "gl", "glActiveTexture{:?}", (index,));
            self.gl.ActiveTexture(TEXTURE0 + index);
        }
        self.check_error();
    }

    // Draw call operations

    /// Corresponds to `glDrawArrays`.
    pub fn draw_arrays(&self, mode: u32, offset: usize, count: usize) {
        unsafe {
            trace!(target: "gl", "glDrawArrays{:?}", (mode, offset, count));
            self.gl.DrawArrays(mode, offset as _, count as _);
        }
        self.check_error();
    }

    /// Corresponds to `glDrawElements`.
    pub fn draw_elements(&self, mode: u32, offset: usize, count: usize, ty: u32) {
        unsafe {
            trace!(target: "gl", "glDrawElements{:?}", (mode, count, ty, offset));
            self.gl.DrawElements(mode, count as _, ty, offset as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glUseProgram`.
    pub fn use_program(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glUseProgram{:?}", (id,));
            self.gl.UseProgram(id);
        }
        self.check_error();
    }
}

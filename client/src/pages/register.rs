//! Two-step registration page.
//!
//! Step one collects identity and account type and is validated locally
//! before step two is shown. Step two collects the role-specific profile and
//! submits. Registering does not sign the user in; success moves to the
//! login page with a notice.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use escenarte::routes::{LOGIN_PATH, Screen};
use escenarte::types::{MusicianProfile, OrganizerProfile, Profile, Registration};
use escenarte::{ApiError, Role, SessionStore};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

const REGISTER_FALLBACK: &str = "Error al registrar el usuario";

pub const GENRES: &[(&str, &str)] = &[
    ("rock", "Rock"),
    ("pop", "Pop"),
    ("jazz", "Jazz"),
    ("blues", "Blues"),
    ("clásica", "Clásica"),
    ("electrónica", "Electrónica"),
    ("folk", "Folk"),
    ("rap", "Rap/Hip-Hop"),
    ("latina", "Música Latina"),
    ("flamenco", "Flamenco"),
];

pub const INSTRUMENTS: &[(&str, &str)] = &[
    ("voz", "Voz"),
    ("guitarra", "Guitarra"),
    ("piano", "Piano/Teclado"),
    ("bajo", "Bajo"),
    ("batería", "Batería"),
    ("violín", "Violín"),
    ("saxofón", "Saxofón"),
    ("trompeta", "Trompeta"),
    ("dj", "DJ"),
    ("otro", "Otro"),
];

pub const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("principiante", "Principiante (0-2 años)"),
    ("intermedio", "Intermedio (3-5 años)"),
    ("avanzado", "Avanzado (6-10 años)"),
    ("profesional", "Profesional (10+ años)"),
];

pub const VENUE_TYPES: &[(&str, &str)] = &[
    ("restaurante", "Restaurante"),
    ("bar", "Bar"),
    ("cafe", "Café"),
    ("sala", "Sala de conciertos"),
    ("discoteca", "Discoteca/Club"),
    ("hotel", "Hotel"),
    ("teatro", "Teatro"),
    ("centro", "Centro cultural"),
    ("festival", "Festival"),
    ("otro", "Otro"),
];

pub const EVENT_TYPES: &[(&str, &str)] = &[
    ("concierto", "Conciertos"),
    ("jam", "Jam Sessions"),
    ("ambiente", "Música de ambiente"),
    ("fiestas", "Fiestas privadas"),
    ("bodas", "Bodas y celebraciones"),
    ("corporativos", "Eventos corporativos"),
    ("festivales", "Festivales"),
];

// =============================================================================
// FORM MODEL
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Identity,
    Profile,
}

/// Multi-choice profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceField {
    Genres,
    Instruments,
    EventTypes,
}

/// Everything the form holds across both steps.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub bio: String,
    pub phone: String,
    pub location: String,
    pub genres: Vec<String>,
    pub instruments: Vec<String>,
    pub experience: String,
    pub venue_name: String,
    pub venue_type: String,
    pub capacity: String,
    pub event_types: Vec<String>,
}

impl RegisterForm {
    pub fn new(role: Role) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role,
            bio: String::new(),
            phone: String::new(),
            location: String::new(),
            genres: Vec::new(),
            instruments: Vec::new(),
            experience: String::new(),
            venue_name: String::new(),
            venue_type: String::new(),
            capacity: String::new(),
            event_types: Vec::new(),
        }
    }

    /// Validate step one. Returns the message to show on failure.
    pub fn check_identity(&self) -> Result<(), String> {
        Registration::new(&self.name, &self.email, &self.password, self.role.clone())
            .validate(&self.confirm_password)
            .map_err(|e| e.user_message())
    }

    /// Profile shaped for the selected role.
    pub fn profile(&self) -> Profile {
        let bio = self.bio.trim().to_owned();
        let phone = self.phone.trim().to_owned();
        let location = self.location.trim().to_owned();
        match self.role {
            Role::Organizer => Profile::Organizer(OrganizerProfile {
                bio,
                phone,
                location,
                venue_name: self.venue_name.trim().to_owned(),
                venue_type: self.venue_type.clone(),
                capacity: self.capacity.trim().parse().ok(),
                event_types: self.event_types.clone(),
            }),
            _ => Profile::Musician(MusicianProfile {
                bio,
                phone,
                location,
                genres: self.genres.clone(),
                instruments: self.instruments.clone(),
                experience: self.experience.clone(),
                rate: None,
            }),
        }
    }

    pub fn has_choice(&self, field: ChoiceField, value: &str) -> bool {
        let list = match field {
            ChoiceField::Genres => &self.genres,
            ChoiceField::Instruments => &self.instruments,
            ChoiceField::EventTypes => &self.event_types,
        };
        list.iter().any(|v| v == value)
    }

    pub fn toggle_choice(&mut self, field: ChoiceField, value: &str) {
        let list = match field {
            ChoiceField::Genres => &mut self.genres,
            ChoiceField::Instruments => &mut self.instruments,
            ChoiceField::EventTypes => &mut self.event_types,
        };
        toggle_choice(list, value);
    }

    pub fn registration(&self) -> Registration {
        let mut registration = Registration::new(&self.name, &self.email, &self.password, self.role.clone());
        registration.profile = self.profile();
        registration
    }
}

/// Account type preselected by `?type=` links from the landing page.
pub fn role_from_query(raw: Option<&str>) -> Role {
    match raw {
        Some(Role::ORGANIZER) => Role::Organizer,
        _ => Role::Musician,
    }
}

/// Add `value` if absent, remove it if present.
pub fn toggle_choice(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_owned());
    }
}

fn register_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Validation { message, .. } if !message.is_empty() => message.clone(),
        _ => REGISTER_FALLBACK.to_owned(),
    }
}

// =============================================================================
// VIEW
// =============================================================================

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    let initial_role = role_from_query(query.get_untracked().get("type").as_deref());
    let form = RwSignal::new(RegisterForm::new(initial_role));
    let step = RwSignal::new(Step::Identity);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let next_step = move |_| match form.with(RegisterForm::check_identity) {
        Ok(()) => {
            error.set(None);
            step.set(Step::Profile);
        }
        Err(msg) => error.set(Some(msg)),
    };
    let prev_step = move |_| step.set(Step::Identity);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || step.get() != Step::Profile {
            return;
        }
        busy.set(true);
        error.set(None);
        let registration = form.with(RegisterForm::registration);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(&registration).await {
                Ok(_) => navigate(&format!("{LOGIN_PATH}?registered=true"), NavigateOptions::default()),
                Err(e) => error.set(Some(register_error_message(&e))),
            }
            busy.set(false);
        });
    };

    let is_musician = move || form.with(|f| f.role == Role::Musician);

    view! {
        <div class="auth-page">
            <div class="auth-card register-card">
                <a href=Screen::Landing.pattern() class="auth-logo"><h1>"EscenArte"</h1></a>
                <h2>"Crear una cuenta"</h2>
                <p>
                    {move || if is_musician() {
                        "Registra tu perfil como músico y encuentra oportunidades"
                    } else {
                        "Registra tu perfil como organizador y encuentra talento musical"
                    }}
                </p>
                <Show when=move || error.get().is_some()>
                    <div class="auth-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <Show
                        when=move || step.get() == Step::Identity
                        fallback=move || view! {
                            <ProfileStep form=form/>
                            <div class="auth-form__actions">
                                <button type="button" class="btn btn-secondary" on:click=prev_step>"Atrás"</button>
                                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                                    {move || if busy.get() { "Registrando..." } else { "Completar registro" }}
                                </button>
                            </div>
                        }
                    >
                        <IdentityStep form=form/>
                        <button type="button" class="btn btn-primary btn-block" on:click=next_step>"Siguiente"</button>
                    </Show>
                </form>
                <p class="auth-footer">
                    "¿Ya tienes una cuenta? "
                    <a href=Screen::Login.pattern()>"Inicia sesión"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn IdentityStep(form: RwSignal<RegisterForm>) -> impl IntoView {
    view! {
        <div class="auth-role-picker">
            <label>
                <input
                    type="radio"
                    name="role"
                    prop:checked=move || form.with(|f| f.role == Role::Musician)
                    on:change=move |_| form.update(|f| f.role = Role::Musician)
                />
                "Soy Músico"
            </label>
            <label>
                <input
                    type="radio"
                    name="role"
                    prop:checked=move || form.with(|f| f.role == Role::Organizer)
                    on:change=move |_| form.update(|f| f.role = Role::Organizer)
                />
                "Soy Organizador"
            </label>
        </div>
        <label>"Nombre completo"</label>
        <input
            type="text"
            placeholder="Tu nombre completo"
            prop:value=move || form.with(|f| f.name.clone())
            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
        />
        <label>"Email"</label>
        <input
            type="email"
            placeholder="Tu correo electrónico"
            prop:value=move || form.with(|f| f.email.clone())
            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
        />
        <label>"Contraseña"</label>
        <input
            type="password"
            placeholder="Crea una contraseña"
            prop:value=move || form.with(|f| f.password.clone())
            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
        />
        <label>"Confirmar contraseña"</label>
        <input
            type="password"
            placeholder="Repite tu contraseña"
            prop:value=move || form.with(|f| f.confirm_password.clone())
            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
        />
    }
}

#[component]
fn ProfileStep(form: RwSignal<RegisterForm>) -> impl IntoView {
    let is_musician = move || form.with(|f| f.role == Role::Musician);

    view! {
        <label>"Biografía"</label>
        <textarea
            prop:value=move || form.with(|f| f.bio.clone())
            on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
        ></textarea>
        <label>"Teléfono"</label>
        <input
            type="tel"
            placeholder="Tu número de contacto"
            prop:value=move || form.with(|f| f.phone.clone())
            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
        />
        <label>"Ubicación"</label>
        <input
            type="text"
            placeholder="Ciudad, País"
            prop:value=move || form.with(|f| f.location.clone())
            on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
        />
        <Show
            when=is_musician
            fallback=move || view! {
                <label>"Nombre del local/evento"</label>
                <input
                    type="text"
                    placeholder="Nombre de tu local o evento"
                    prop:value=move || form.with(|f| f.venue_name.clone())
                    on:input=move |ev| form.update(|f| f.venue_name = event_target_value(&ev))
                />
                <label>"Tipo de local"</label>
                <select on:change=move |ev| form.update(|f| f.venue_type = event_target_value(&ev))>
                    <option value="">"Selecciona el tipo de local"</option>
                    {VENUE_TYPES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <label>"Capacidad aproximada"</label>
                <input
                    type="number"
                    placeholder="Número aproximado de personas"
                    prop:value=move || form.with(|f| f.capacity.clone())
                    on:input=move |ev| form.update(|f| f.capacity = event_target_value(&ev))
                />
                <label>"Tipos de eventos"</label>
                <ChoiceGroup options=EVENT_TYPES form=form field=ChoiceField::EventTypes/>
            }
        >
            <label>"Géneros musicales"</label>
            <ChoiceGroup options=GENRES form=form field=ChoiceField::Genres/>
            <label>"Instrumentos"</label>
            <ChoiceGroup options=INSTRUMENTS form=form field=ChoiceField::Instruments/>
            <label>"Experiencia"</label>
            <select on:change=move |ev| form.update(|f| f.experience = event_target_value(&ev))>
                <option value="">"Selecciona tu nivel de experiencia"</option>
                {EXPERIENCE_LEVELS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
        </Show>
    }
}

/// Checkbox group toggling values in one list field of the form.
#[component]
fn ChoiceGroup(
    options: &'static [(&'static str, &'static str)],
    form: RwSignal<RegisterForm>,
    field: ChoiceField,
) -> impl IntoView {
    view! {
        <div class="choice-group">
            {options
                .iter()
                .map(|(value, label)| {
                    let value = *value;
                    view! {
                        <label class="choice-group__item">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.has_choice(field, value))
                                on:change=move |_| form.update(|f| f.toggle_choice(field, value))
                            />
                            {*label}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

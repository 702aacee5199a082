//! Global CSS styles for the portfolio page.
//!
//! Reveal and modal animations are part of the behaviour contract: the
//! modal component listens for `modal-fade-out` to finish closing, and the
//! reveal tracker toggles `.visible`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #fafaf7;
  --surface: #ffffff;
  --border: #e4e4de;
  --text: #1d1d1f;
  --text-muted: #5f6368;
  --accent: #2f6f5e;
  --accent-hover: #24574a;
  --overlay: rgba(17, 17, 17, 0.72);

  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-serif: 'Fraunces', Georgia, serif;

  --radius: 10px;
  --shadow: 0 8px 24px rgba(0, 0, 0, 0.08);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 700ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text);
  line-height: 1.6;
  min-height: 100vh;
}

img {
  max-width: 100%;
  display: block;
}

/* === Hero === */
.hero {
  min-height: 80vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 4rem 1.5rem;
}

.hero__heading {
  font-family: var(--font-serif);
  font-size: clamp(2.5rem, 6vw, 4rem);
  line-height: 1.1;
}

.hero__tagline {
  margin: 1rem auto 2rem;
  max-width: 36rem;
  color: var(--text-muted);
  font-size: 1.125rem;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.75rem 1.75rem;
  border: none;
  border-radius: var(--radius);
  background: var(--accent);
  color: #fff;
  font: inherit;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn:hover {
  background: var(--accent-hover);
  transform: translateY(-1px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: progress;
  transform: none;
}

.btn-link {
  background: none;
  border: none;
  color: var(--accent);
  font: inherit;
  cursor: pointer;
  text-decoration: underline;
}

/* === Sections & Reveal === */
.page {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.section {
  padding: 5rem 0;
}

.section__title {
  font-family: var(--font-serif);
  font-size: 2rem;
  margin-bottom: 2rem;
}

.section__empty {
  color: var(--text-muted);
}

.section,
.project-card {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.section.visible,
.project-card.visible {
  opacity: 1;
  transform: none;
}

@media (prefers-reduced-motion: reduce) {
  .section,
  .project-card {
    opacity: 1;
    transform: none;
    transition: none;
  }
}

/* === Project Cards === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  box-shadow: var(--shadow);
}

.project-card__img,
.project-card__placeholder {
  width: 100%;
  aspect-ratio: 16 / 10;
  object-fit: cover;
}

.project-card__placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--border);
  color: var(--text-muted);
  font-size: 2rem;
}

.project-card__body {
  padding: 1.25rem;
}

.project-card__title {
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

.project-card__description {
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.view-project-link {
  padding: 0;
  font-weight: 600;
  text-decoration: none;
}

.view-project-link:hover {
  text-decoration: underline;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  background: var(--overlay);
  animation: modal-fade-in var(--transition-normal) forwards;
}

.modal-overlay.closing {
  animation: modal-fade-out var(--transition-normal) forwards;
}

.modal-content {
  position: relative;
  width: min(42rem, 100%);
  max-height: 90vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
}

.modal-content__img {
  width: 100%;
  border-radius: calc(var(--radius) - 4px);
  margin-bottom: 1.25rem;
}

.modal-content__title {
  font-family: var(--font-serif);
  font-size: 1.75rem;
  margin-bottom: 0.75rem;
}

.modal-content__description {
  margin-bottom: 1rem;
}

.modal-content__note {
  color: var(--text-muted);
  font-size: 0.875rem;
}

.modal-close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  width: 2.25rem;
  height: 2.25rem;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: var(--text-muted);
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.modal-close:hover {
  background: var(--border);
}

@keyframes modal-fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes modal-fade-out {
  from { opacity: 1; }
  to { opacity: 0; }
}

/* === Contact Form === */
.contact-form {
  display: grid;
  gap: 1.25rem;
  max-width: 36rem;
}

.form-field {
  display: grid;
  gap: 0.375rem;
}

.input-label {
  font-weight: 600;
  font-size: 0.875rem;
}

.input-field {
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  font: inherit;
  color: inherit;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
}

.textarea {
  resize: vertical;
  min-height: 8rem;
}

.form-status {
  min-height: 1.5rem;
  font-size: 0.95rem;
}

/* === Footer === */
.footer {
  padding: 3rem 1.5rem;
  text-align: center;
  color: var(--text-muted);
  font-size: 0.875rem;
}
"#;

//! Global CSS styles for Prism Identity.
//!
//! Pastel spectrum, frosted glass panels and a rice-paper scroll.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAGE */
  --page: #f8fafc;
  --paper: #FDFBF7;
  --ink: #1e293b;
  --ink-soft: #475569;
  --ink-muted: #94a3b8;

  /* SPECTRUM */
  --blue: #60a5fa;
  --pink: #f472b6;
  --purple: #a78bfa;
  --cyan: #22d3ee;

  /* ACCENTS */
  --seal-red: #b91c1c;
  --glass: rgba(255, 255, 255, 0.7);
  --glass-border: rgba(255, 255, 255, 0.6);

  /* Typography */
  --font-sans: 'Noto Sans SC', 'PingFang SC', 'Microsoft YaHei', system-ui, sans-serif;
  --font-serif: 'Noto Serif SC', 'Songti SC', 'SimSun', Georgia, serif;

  /* Motion */
  --ease-soft: cubic-bezier(0.22, 1, 0.36, 1);
}

/* === Reset === */
*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  font-family: var(--font-sans);
  color: var(--ink);
  background: var(--page);
  -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }

button { font: inherit; }

/* === Shell === */
.app-shell {
  position: relative;
  min-height: 100vh;
  overflow-x: hidden;
}

.app-main {
  position: relative;
  z-index: 1;
  max-width: 1080px;
  margin: 0 auto;
  padding: 0 24px;
}

.glass-panel {
  background: var(--glass);
  backdrop-filter: blur(16px);
  -webkit-backdrop-filter: blur(16px);
  border: 1px solid var(--glass-border);
}

/* === Icons === */
.icon { display: inline-block; flex-shrink: 0; vertical-align: middle; }

.icon-blue { color: var(--blue); }
.icon-pink { color: var(--pink); }
.icon-purple { color: var(--purple); }
.icon-cyan { color: var(--cyan); }

/* === Buttons === */
.btn-primary, .btn-soft {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  border: none;
  border-radius: 999px;
  cursor: pointer;
  transition: transform 0.2s var(--ease-soft), box-shadow 0.2s ease, opacity 0.2s ease;
}

.btn-primary {
  padding: 12px 28px;
  color: #fff;
  background: linear-gradient(90deg, var(--blue), var(--purple), var(--pink));
  box-shadow: 0 10px 30px -10px rgba(167, 139, 250, 0.6);
}

.btn-primary:hover:not(:disabled) { transform: translateY(-2px); }

.btn-primary:disabled { opacity: 0.7; cursor: wait; }

.btn-soft {
  padding: 10px 24px;
  color: var(--ink-soft);
  background: #fff;
  border: 1px solid #e2e8f0;
}

.btn-soft:hover { box-shadow: 0 6px 20px -8px rgba(15, 23, 42, 0.2); }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border: none;
  border-radius: 50%;
  color: var(--ink-soft);
  background: rgba(255, 255, 255, 0.8);
  cursor: pointer;
  transition: background 0.2s ease, color 0.2s ease;
}

.icon-btn:hover { background: #fff; color: var(--ink); }

.spinner {
  width: 16px;
  height: 16px;
  border: 2px solid rgba(255, 255, 255, 0.4);
  border-top-color: #fff;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 16px;
  left: 50%;
  transform: translateX(-50%);
  z-index: 40;
  width: calc(100% - 32px);
  max-width: 1080px;
  border-radius: 999px;
  box-shadow: 0 8px 32px -12px rgba(15, 23, 42, 0.15);
}

.header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 10px 20px;
}

.logo {
  display: flex;
  align-items: center;
  gap: 10px;
  cursor: pointer;
}

.logo-mark {
  position: relative;
  width: 36px;
  height: 36px;
}

.logo-halo {
  position: absolute;
  inset: 0;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--blue), var(--pink));
  filter: blur(6px);
  opacity: 0.5;
  transition: opacity 0.3s ease;
}

.logo-mark:hover .logo-halo { opacity: 0.9; }

.logo-badge {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 100%;
  border-radius: 50%;
  color: var(--pink);
  background: #fff;
}

.logo-text {
  font-family: var(--font-serif);
  font-weight: 700;
  font-size: 18px;
  letter-spacing: 0.08em;
}

.header-nav { display: flex; gap: 4px; }

.nav-link {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 8px 14px;
  border: none;
  border-radius: 999px;
  color: var(--ink-soft);
  background: transparent;
  cursor: pointer;
  transition: background 0.2s ease, color 0.2s ease;
}

.nav-link:hover { color: var(--ink); background: rgba(255, 255, 255, 0.9); }

/* === Hero === */
.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 180px 0 120px;
  text-align: center;
  animation: fade-up 0.8s var(--ease-soft) both;
}

.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 6px 14px;
  margin-bottom: 24px;
  border-radius: 999px;
  font-size: 13px;
  color: var(--purple);
  background: rgba(167, 139, 250, 0.12);
}

.hero-title {
  margin: 0 0 24px;
  font-family: var(--font-serif);
  font-size: 52px;
  line-height: 1.25;
}

.hero-gradient {
  background: linear-gradient(90deg, var(--blue), var(--purple), var(--pink));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-lead {
  max-width: 560px;
  margin: 0 0 40px;
  font-size: 17px;
  line-height: 1.8;
  color: var(--ink-soft);
}

/* === Categories === */
.category-list { display: flex; flex-direction: column; gap: 96px; padding-bottom: 96px; }

.category { scroll-margin-top: 90px; }

.category-header {
  display: flex;
  align-items: center;
  gap: 16px;
  margin-bottom: 28px;
}

.category-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 56px;
  height: 56px;
  border-radius: 18px;
  background: #fff;
  box-shadow: 0 6px 20px -10px rgba(15, 23, 42, 0.2);
}

.category-title { margin: 0 0 4px; font-family: var(--font-serif); font-size: 28px; }

.category-desc { margin: 0; color: var(--ink-soft); }

/* === Section cards === */
.section-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 20px;
}

.section-card {
  position: relative;
  overflow: hidden;
  padding: 24px;
  border-radius: 24px;
  cursor: pointer;
  transition: transform 0.3s var(--ease-soft), box-shadow 0.3s ease;
}

.section-card:hover { transform: translateY(-4px); }

.border-blue { border-color: rgba(96, 165, 250, 0.3); }
.border-pink { border-color: rgba(244, 114, 182, 0.3); }
.border-purple { border-color: rgba(167, 139, 250, 0.3); }
.border-cyan { border-color: rgba(34, 211, 238, 0.3); }

.shadow-blue:hover { box-shadow: 0 20px 40px -16px rgba(96, 165, 250, 0.45); }
.shadow-pink:hover { box-shadow: 0 20px 40px -16px rgba(244, 114, 182, 0.45); }
.shadow-purple:hover { box-shadow: 0 20px 40px -16px rgba(167, 139, 250, 0.45); }
.shadow-cyan:hover { box-shadow: 0 20px 40px -16px rgba(34, 211, 238, 0.45); }

.card-blob {
  position: absolute;
  top: -40px;
  right: -40px;
  width: 140px;
  height: 140px;
  border-radius: 50%;
  filter: blur(30px);
  opacity: 0;
  transition: opacity 0.4s ease;
}

.section-card:hover .card-blob { opacity: 0.5; }

.blob-blue { background: var(--blue); }
.blob-pink { background: var(--pink); }

.card-top {
  position: relative;
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 16px;
}

.card-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 44px;
  height: 44px;
  border-radius: 14px;
  background: #fff;
}

.card-arrow {
  opacity: 0;
  transform: translateX(-6px);
  transition: opacity 0.3s ease, transform 0.3s var(--ease-soft);
}

.section-card:hover .card-arrow { opacity: 1; transform: translateX(0); }

.card-title { position: relative; margin: 0 0 8px; font-size: 18px; }

.card-desc { position: relative; margin: 0; font-size: 14px; line-height: 1.7; color: var(--ink-soft); }

/* === Modal === */
.modal-root {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 24px;
}

.modal-overlay { position: absolute; inset: 0; animation: fade-in 0.3s ease both; }

.modal-overlay--glass { background: rgba(248, 250, 252, 0.6); backdrop-filter: blur(8px); }

.modal-overlay--paper { background: rgba(15, 23, 42, 0.55); backdrop-filter: blur(4px); }

.modal-panel {
  position: relative;
  display: flex;
  flex-direction: column;
  width: 100%;
  max-height: 90vh;
  animation: pop-in 0.4s var(--ease-soft) both;
}

.modal-panel--glass {
  max-width: 760px;
  border-radius: 32px;
  background: rgba(255, 255, 255, 0.92);
  box-shadow: 0 30px 80px -20px rgba(15, 23, 42, 0.35);
}

.modal-panel--paper { max-width: 720px; }

/* === Section detail === */
.detail-header {
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 20px 24px;
  border-bottom: 1px solid #f1f5f9;
}

.detail-title { flex: 1; margin: 0; font-family: var(--font-serif); font-size: 22px; }

.detail-body { overflow-y: auto; padding: 28px 36px 36px; }

.detail-block { margin-bottom: 24px; animation: fade-up 0.5s var(--ease-soft) both; }

.detail-footer {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 20px;
  padding-top: 12px;
  animation: fade-up 0.5s var(--ease-soft) both;
}

.divider { display: flex; align-items: center; gap: 10px; width: 60%; }

.divider-line { flex: 1; height: 1px; background: #e2e8f0; }

.divider-dot { width: 6px; height: 6px; border-radius: 50%; background: var(--purple); }

/* === Content blocks === */
.block-text { margin: 0; font-size: 16px; line-height: 1.9; color: var(--ink-soft); white-space: pre-line; }

.emphasis-mark {
  color: var(--ink);
  background: linear-gradient(transparent 60%, rgba(244, 114, 182, 0.25) 60%);
}

.emphasis-info { color: #1d4ed8; }

.emphasis-list { color: var(--ink); }

.info-box {
  padding: 20px 22px;
  border-radius: 20px;
  background: rgba(96, 165, 250, 0.08);
  border: 1px solid rgba(96, 165, 250, 0.2);
}

.info-box-title {
  display: flex;
  align-items: center;
  gap: 8px;
  margin-bottom: 8px;
  font-weight: 600;
  color: #1d4ed8;
}

.info-box-text { margin: 0; line-height: 1.8; color: var(--ink-soft); white-space: pre-line; }

.block-figure { position: relative; overflow: hidden; margin: 0; border-radius: 20px; }

.block-figure img { display: block; width: 100%; }

.block-figure figcaption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 28px 20px 14px;
  font-size: 13px;
  color: #fff;
  background: linear-gradient(transparent, rgba(15, 23, 42, 0.6));
}

.block-quote {
  position: relative;
  margin: 0;
  padding: 24px 28px 24px 56px;
  border-radius: 20px;
  background: linear-gradient(135deg, rgba(167, 139, 250, 0.08), rgba(244, 114, 182, 0.08));
}

.block-quote p { margin: 0; font-family: var(--font-serif); font-size: 18px; line-height: 1.8; }

.quote-mark { position: absolute; top: 18px; left: 18px; color: var(--purple); opacity: 0.5; }

.block-list { margin: 0; padding: 0; list-style: none; }

.block-list li {
  display: flex;
  gap: 12px;
  margin-bottom: 10px;
  line-height: 1.8;
  color: var(--ink-soft);
}

.list-dot {
  flex-shrink: 0;
  width: 6px;
  height: 6px;
  margin-top: 12px;
  border-radius: 50%;
  background: var(--pink);
}

.link-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 12px;
}

.link-tile {
  display: block;
  padding: 16px;
  border-radius: 16px;
  background: #fff;
  border: 1px solid #f1f5f9;
  transition: border-color 0.2s ease, transform 0.2s var(--ease-soft);
}

.link-tile:hover { border-color: var(--purple); transform: translateY(-2px); }

.link-tile-head { display: flex; justify-content: space-between; align-items: center; gap: 8px; }

.link-tile-title { font-weight: 600; }

.link-tile-desc { margin: 6px 0 0; font-size: 13px; color: var(--ink-muted); }

/* === Quote collection === */
.collection-toolbar {
  display: flex;
  justify-content: flex-end;
  align-items: center;
  gap: 12px;
  margin-bottom: 16px;
}

.collection-scroll { overflow-y: auto; border-radius: 4px; }

.scroll-paper {
  position: relative;
  overflow: hidden;
  padding: 56px 48px 48px;
  background: var(--paper);
  color: #292524;
  font-family: var(--font-serif);
  box-shadow: inset 0 0 0 12px #FDFBF7, inset 0 0 0 13px rgba(120, 113, 108, 0.25);
}

.ink-wash {
  position: absolute;
  width: 320px;
  height: 320px;
  border-radius: 50%;
  filter: blur(40px);
  opacity: 0.35;
  pointer-events: none;
}

.ink-wash--top { top: -120px; right: -80px; background: radial-gradient(circle, #d6d3d1, transparent 70%); }

.ink-wash--bottom { bottom: -140px; left: -100px; background: radial-gradient(circle, #e7e5e4, transparent 70%); }

.scroll-head { position: relative; margin-bottom: 36px; text-align: center; }

.scroll-title { margin: 0; font-size: 34px; letter-spacing: 0.3em; }

.scroll-subtitle {
  margin: 8px 0 0;
  font-size: 12px;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: #a8a29e;
}

.scroll-entries { position: relative; margin: 0; padding: 0; list-style: none; }

.scroll-entry {
  display: flex;
  gap: 20px;
  padding: 18px 0 18px 16px;
  border-left: 1px solid rgba(120, 113, 108, 0.25);
}

.entry-number { flex-shrink: 0; width: 48px; font-size: 12px; color: #a8a29e; }

.entry-text { margin: 0; font-size: 17px; line-height: 1.9; }

.scroll-foot {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 14px;
  margin-top: 40px;
}

.scroll-seal {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 6px 8px;
  border: 2px solid var(--seal-red);
  border-radius: 6px;
  color: var(--seal-red);
  font-size: 14px;
  line-height: 1.2;
  transform: rotate(-6deg);
}

.scroll-footer-line { margin: 0; font-size: 12px; letter-spacing: 0.2em; color: #a8a29e; }

/* === Footer === */
.site-footer {
  position: relative;
  z-index: 1;
  padding: 48px 24px 64px;
  text-align: center;
  color: var(--ink-muted);
}

.footer-mark { color: var(--pink); margin-bottom: 8px; }

.footer-line { margin: 0 0 12px; font-size: 14px; }

.footer-disclaimer { max-width: 520px; margin: 0 auto; font-size: 12px; line-height: 1.8; }

/* === Floating particles === */
.floating-layer {
  position: fixed;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  pointer-events: none;
}

.ambient-glow {
  position: absolute;
  width: 480px;
  height: 480px;
  border-radius: 50%;
  filter: blur(100px);
  opacity: 0.35;
}

.ambient-glow--blue { top: -120px; left: -120px; background: var(--blue); }

.ambient-glow--pink { bottom: -160px; right: -120px; background: var(--pink); }

.particle { position: absolute; animation-name: drift; animation-timing-function: ease-in-out; animation-iteration-count: infinite; }

.particle-sm { width: 6px; height: 6px; }
.particle-lg { width: 12px; height: 12px; }

.particle-round { border-radius: 50%; }
.particle-diamond { transform: rotate(45deg); border-radius: 2px; }

.particle-blue { background: var(--blue); }
.particle-pink { background: var(--pink); }
.particle-white { background: #fff; box-shadow: 0 0 6px rgba(167, 139, 250, 0.6); }

/* === Keyframes === */
@keyframes spin { to { transform: rotate(360deg); } }

@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }

@keyframes fade-up {
  from { opacity: 0; transform: translateY(16px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes pop-in {
  from { opacity: 0; transform: scale(0.96) translateY(12px); }
  to { opacity: 1; transform: scale(1) translateY(0); }
}

@keyframes drift {
  0%, 100% { translate: 0 0; }
  50% { translate: 0 -40px; }
}

/* === Responsive === */
@media (max-width: 720px) {
  .header-nav { display: none; }
  .hero { padding: 140px 0 80px; }
  .hero-title { font-size: 36px; }
  .detail-body { padding: 20px; }
  .scroll-paper { padding: 40px 24px 32px; }
}
"#;
